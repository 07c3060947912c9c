//! Feature Flag Core
//!
//! Defines the [`Flag`] trait, its optional capabilities, and the two
//! built-in variants.

use crate::error::{FeatureResult, ParamError};
use crate::params::{self, ENABLED, RATIO};
use crate::template::{BOOLEAN_TEMPLATE, RATIO_TEMPLATE, TemplateEngine};
use flagset_core::FormValues;
use parking_lot::RwLock;
use serde_json::json;
use std::fmt;

/// A named feature that is either enabled or disabled.
///
/// Implementations guard their own state; every method may be called from
/// any thread. Optional capabilities are exposed through the `as_*`
/// methods so the admin handler can discover them without knowing the
/// concrete type.
pub trait Flag: Send + Sync + fmt::Debug {
    /// Name of the flag. Never changes.
    fn name(&self) -> &str;

    /// Whether the feature should be active for this call.
    fn is_enabled(&self) -> bool;

    /// Enable or disable the flag.
    fn set(&self, enabled: bool);

    /// Human-readable form used in listings and responses.
    fn as_display(&self) -> Option<&dyn fmt::Display> {
        None
    }

    /// HTML control for the admin page.
    fn as_renderable(&self) -> Option<&dyn RenderableFlag> {
        None
    }

    /// Multi-field update from request parameters.
    fn as_settable(&self) -> Option<&dyn SettableFlag> {
        None
    }
}

/// Flags that apply their own parameter rules on update.
pub trait SettableFlag {
    fn set_from(&self, params: &FormValues) -> Result<(), ParamError>;
}

/// Flags that render an interactive HTML control.
///
/// The rendered form posts back to `./{name}`.
pub trait RenderableFlag {
    fn render_html(&self, engine: &TemplateEngine) -> FeatureResult<String>;
}

/// A feature flag that can be switched on or off.
#[derive(Debug)]
pub struct BooleanFlag {
    name: String,
    enabled: RwLock<bool>,
}

impl BooleanFlag {
    /// Create a disabled flag.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: RwLock::new(false),
        }
    }
}

impl Flag for BooleanFlag {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self) -> bool {
        *self.enabled.read()
    }

    fn set(&self, enabled: bool) {
        *self.enabled.write() = enabled;
    }

    fn as_renderable(&self) -> Option<&dyn RenderableFlag> {
        Some(self)
    }

    fn as_settable(&self) -> Option<&dyn SettableFlag> {
        Some(self)
    }
}

impl SettableFlag for BooleanFlag {
    /// `enabled` is mandatory.
    fn set_from(&self, params: &FormValues) -> Result<(), ParamError> {
        let enabled = params::require_enabled(params.get(ENABLED))?;
        self.set(enabled);
        Ok(())
    }
}

impl RenderableFlag for BooleanFlag {
    fn render_html(&self, engine: &TemplateEngine) -> FeatureResult<String> {
        engine.render(
            BOOLEAN_TEMPLATE,
            &json!({
                "name": self.name,
                "enabled": self.is_enabled(),
            }),
        )
    }
}

#[derive(Debug, Clone, Copy)]
struct RatioState {
    enabled: bool,
    ratio: f64,
}

/// A feature flag that is only active for a fraction of calls.
///
/// Even when enabled, each [`Flag::is_enabled`] call independently
/// reports `true` with probability `ratio`. Useful for trying a feature on
/// part of the traffic first.
///
/// ```
/// use flagset_features::{Flag, RatioFlag};
///
/// let flag = RatioFlag::new("surprise", 1.0);
/// assert!(!flag.is_enabled());
///
/// flag.set(true);
/// assert!(flag.is_enabled());
/// assert_eq!(flag.to_string(), "surprise: true (ratio=1.00)");
/// ```
#[derive(Debug)]
pub struct RatioFlag {
    name: String,
    state: RwLock<RatioState>,
}

impl RatioFlag {
    /// Create a disabled flag that activates for `ratio` of calls once
    /// enabled.
    ///
    /// `ratio` is meant to lie in `[0.0, 1.0]` but is stored as given.
    pub fn new(name: impl Into<String>, ratio: f64) -> Self {
        Self {
            name: name.into(),
            state: RwLock::new(RatioState {
                enabled: false,
                ratio,
            }),
        }
    }

    pub fn ratio(&self) -> f64 {
        self.state.read().ratio
    }

    /// Change the activation ratio.
    pub fn set_ratio(&self, ratio: f64) {
        self.state.write().ratio = ratio;
    }

    fn snapshot(&self) -> RatioState {
        *self.state.read()
    }
}

impl Flag for RatioFlag {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self) -> bool {
        let RatioState { enabled, ratio } = self.snapshot();
        // drawn after the lock is released
        enabled && rand::random::<f64>() < ratio
    }

    fn set(&self, enabled: bool) {
        self.state.write().enabled = enabled;
    }

    fn as_display(&self) -> Option<&dyn fmt::Display> {
        Some(self)
    }

    fn as_renderable(&self) -> Option<&dyn RenderableFlag> {
        Some(self)
    }

    fn as_settable(&self) -> Option<&dyn SettableFlag> {
        Some(self)
    }
}

impl fmt::Display for RatioFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let RatioState { enabled, ratio } = self.snapshot();
        write!(f, "{}: {} (ratio={:.2})", self.name, enabled, ratio)
    }
}

impl SettableFlag for RatioFlag {
    /// Both `enabled` and `ratio` are optional and applied in that order.
    ///
    /// An invalid `ratio` is reported after `enabled` has already been
    /// applied; the earlier change stays in effect.
    fn set_from(&self, params: &FormValues) -> Result<(), ParamError> {
        let enabled = params.get(ENABLED);
        if !params::is_blank(enabled) {
            self.set(params::parse_bool(enabled.unwrap_or_default())?);
        }

        let ratio = params.get(RATIO);
        if !params::is_blank(ratio) {
            self.set_ratio(params::parse_ratio(ratio.unwrap_or_default())?);
        }

        Ok(())
    }
}

impl RenderableFlag for RatioFlag {
    fn render_html(&self, engine: &TemplateEngine) -> FeatureResult<String> {
        let RatioState { enabled, ratio } = self.snapshot();
        engine.render(
            RATIO_TEMPLATE,
            &json!({
                "name": self.name,
                "enabled": enabled,
                "ratio": ratio,
                "ratio_percent": format!("{:.0}%", ratio * 100.0),
            }),
        )
    }
}
