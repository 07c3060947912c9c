//! Logging for flagset.
//!
//! A small set of level-gated macros that write to stderr. Everything is
//! configured from the environment the first time a macro fires:
//!
//! - `FLAGSET_DEBUG=1` - shorthand for debug level
//! - `FLAGSET_LOG_LEVEL=trace|debug|info|warn|error|off`
//! - `FLAGSET_LOG_FORMAT=pretty|compact|json` (default `json`)
//! - `FLAGSET_LOG_COLOR=1|0`
//! - `FLAGSET_LOG_TIMESTAMPS=1|0`
//! - `FLAGSET_LOG_MODULE=1|0`
//!
//! ```rust
//! use flagset_log::{debug, info, warn};
//!
//! info!("registered {} flags", 3);
//! debug!(target: "flagset::admin", "GET /{}", "scream");
//! warn!("rejected update");
//! ```

use once_cell::sync::Lazy;
use std::env;
use std::io::Write;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    /// Nothing is written.
    Off = 5,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Off => "OFF",
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            4 => Level::Error,
            _ => Level::Off,
        }
    }

    #[cfg(feature = "color")]
    fn colored(&self) -> colored::ColoredString {
        use colored::Colorize;
        match self {
            Level::Trace => "TRACE".magenta(),
            Level::Debug => "DEBUG".blue(),
            Level::Info => "INFO".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERROR".red().bold(),
            Level::Off => "OFF".white(),
        }
    }
}

impl FromStr for Level {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "off" | "none" => Ok(Level::Off),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output format for log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `2024-01-01 12:00:00.000 INFO  [target] message`
    Pretty,
    /// `12:00:00 I target: message`
    Compact,
    /// One JSON object per line. Falls back to compact output without
    /// the `json` feature.
    Json,
}

impl FromStr for Format {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(Format::Pretty),
            "compact" => Ok(Format::Compact),
            "json" => Ok(Format::Json),
            _ => Err(()),
        }
    }
}

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);
static LOG_LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);
static CONFIG: Lazy<LogConfig> = Lazy::new(LogConfig::from_env);

/// Logging configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub debug: bool,
    pub level: Level,
    pub format: Format,
    pub color: bool,
    pub timestamps: bool,
    pub module_path: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Info,
            format: Format::Json,
            color: false,
            timestamps: true,
            module_path: true,
        }
    }
}

impl LogConfig {
    /// Read the `FLAGSET_*` variables and publish the level globally.
    pub fn from_env() -> Self {
        let debug = env_flag("FLAGSET_DEBUG").unwrap_or(false);

        let level = env::var("FLAGSET_LOG_LEVEL")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(if debug { Level::Debug } else { Level::Info });

        let format = env::var("FLAGSET_LOG_FORMAT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Format::Json);

        // NO_COLOR wins over TERM when the variable is unset
        let color = env_flag("FLAGSET_LOG_COLOR")
            .unwrap_or_else(|| env::var("NO_COLOR").is_err() && env::var("TERM").is_ok());

        let config = Self {
            debug,
            level,
            format,
            color,
            timestamps: env_flag("FLAGSET_LOG_TIMESTAMPS").unwrap_or(true),
            module_path: env_flag("FLAGSET_LOG_MODULE").unwrap_or(true),
        };

        DEBUG_ENABLED.store(config.debug, Ordering::SeqCst);
        LOG_LEVEL.store(config.level as u8, Ordering::SeqCst);

        config
    }
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name)
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

/// Resolve configuration eagerly. Macros do this on first use anyway.
pub fn init() {
    Lazy::force(&CONFIG);
}

/// Get the resolved configuration.
pub fn config() -> &'static LogConfig {
    &CONFIG
}

#[inline]
pub fn is_debug_enabled() -> bool {
    init();
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

#[inline]
pub fn is_level_enabled(level: Level) -> bool {
    init();
    level != Level::Off && level as u8 >= LOG_LEVEL.load(Ordering::Relaxed)
}

pub fn current_level() -> Level {
    init();
    Level::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// Change the minimum level at runtime.
pub fn set_level(level: Level) {
    init();
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Toggle debug mode at runtime. Enabling it lowers the level to debug.
pub fn set_debug(enabled: bool) {
    init();
    DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    if enabled && current_level() > Level::Debug {
        set_level(Level::Debug);
    }
}

/// Whether a record at `level` is written. Debug records also pass while
/// debug mode is on, whatever the minimum level.
#[inline]
pub fn should_log(level: Level) -> bool {
    is_level_enabled(level) || (level == Level::Debug && is_debug_enabled())
}

#[doc(hidden)]
pub fn log(level: Level, target: &str, message: &str) {
    if !should_log(level) {
        return;
    }

    let config = config();
    match config.format {
        Format::Pretty => log_pretty(level, target, message, config),
        Format::Compact => log_compact(level, target, message, config),
        #[cfg(feature = "json")]
        Format::Json => log_json(level, target, message),
        // JSON lines need the `json` feature
        #[cfg(not(feature = "json"))]
        Format::Json => log_compact(level, target, message, config),
    }
}

fn log_pretty(level: Level, target: &str, message: &str, config: &LogConfig) {
    let mut stderr = std::io::stderr().lock();

    if config.timestamps {
        let now = chrono::Local::now();
        let _ = write!(stderr, "{} ", now.format("%Y-%m-%d %H:%M:%S%.3f"));
    }

    #[cfg(feature = "color")]
    if config.color {
        let _ = write!(stderr, "{:5} ", level.colored());
    } else {
        let _ = write!(stderr, "{:5} ", level.as_str());
    }
    #[cfg(not(feature = "color"))]
    let _ = write!(stderr, "{:5} ", level.as_str());

    if config.module_path && !target.is_empty() {
        let _ = write!(stderr, "[{}] ", target);
    }

    let _ = writeln!(stderr, "{}", message);
}

fn log_compact(level: Level, target: &str, message: &str, config: &LogConfig) {
    let mut stderr = std::io::stderr().lock();

    if config.timestamps {
        let _ = write!(stderr, "{} ", chrono::Local::now().format("%H:%M:%S"));
    }

    let _ = write!(stderr, "{} ", level.as_str().chars().next().unwrap_or('?'));

    if config.module_path && !target.is_empty() {
        let _ = write!(stderr, "{}: ", target);
    }

    let _ = writeln!(stderr, "{}", message);
}

#[cfg(feature = "json")]
fn log_json(level: Level, target: &str, message: &str) {
    #[derive(serde::Serialize)]
    struct Record<'a> {
        timestamp: String,
        level: &'a str,
        target: &'a str,
        message: &'a str,
    }

    let record = Record {
        timestamp: chrono::Utc::now().to_rfc3339(),
        level: level.as_str(),
        target,
        message,
    };

    if let Ok(line) = serde_json::to_string(&record) {
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }
}

#[macro_export]
macro_rules! trace {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Trace) {
            $crate::log($crate::Level::Trace, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Trace) {
            $crate::log($crate::Level::Trace, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log at debug level. Also fires when `FLAGSET_DEBUG=1`.
#[macro_export]
macro_rules! debug {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::should_log($crate::Level::Debug) {
            $crate::log($crate::Level::Debug, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::should_log($crate::Level::Debug) {
            $crate::log($crate::Level::Debug, module_path!(), &format!($($arg)+));
        }
    };
}

#[macro_export]
macro_rules! info {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Info) {
            $crate::log($crate::Level::Info, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Info) {
            $crate::log($crate::Level::Info, module_path!(), &format!($($arg)+));
        }
    };
}

#[macro_export]
macro_rules! warn {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Warn) {
            $crate::log($crate::Level::Warn, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Warn) {
            $crate::log($crate::Level::Warn, module_path!(), &format!($($arg)+));
        }
    };
}

#[macro_export]
macro_rules! error {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Error) {
            $crate::log($crate::Level::Error, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Error) {
            $crate::log($crate::Level::Error, module_path!(), &format!($($arg)+));
        }
    };
}

#[cfg(feature = "tracing")]
pub mod tracing_compat {
    //! A tracing subscriber filtered by the flagset log level.

    use super::*;

    pub fn subscriber() -> impl tracing::Subscriber {
        use tracing_subscriber::prelude::*;
        use tracing_subscriber::{EnvFilter, fmt};

        let config = config();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(current_level().as_str().to_lowercase()));

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_ansi(config.color))
    }
}
