//! Feature Flags for flagset
//!
//! Named on/off switches that can be flipped at runtime, plus an HTTP
//! handler to inspect and change them.
//!
//! # Features
//!
//! - 🚦 **Boolean Flags** - Plain on/off switches
//! - 🎲 **Ratio Flags** - Active for a random fraction of calls
//! - 📋 **Flag Sets** - Thread-safe registry keyed by name
//! - 🛠️ **Admin Handler** - Plain-text and HTML admin page with update forms
//!
//! # Quick Start
//!
//! ```
//! use flagset_features::*;
//! use std::sync::Arc;
//!
//! let features = Arc::new(FlagSet::new());
//! let (scream, _) = features.new_flag("scream");
//!
//! if scream.is_enabled() {
//!     // LOUD
//! }
//! ```
//!
//! # Ratio Rollout
//!
//! ```
//! use flagset_features::*;
//! use std::sync::Arc;
//!
//! let features = FlagSet::new();
//! let surprise = Arc::new(RatioFlag::new("surprise", 0.1));
//! features.add(surprise.clone()).unwrap();
//!
//! // about one call in ten, once switched on
//! surprise.set(true);
//! let _ = surprise.is_enabled();
//! ```
//!
//! # Admin Handler
//!
//! ```
//! use flagset_core::HttpRequest;
//! use flagset_features::*;
//! use std::sync::Arc;
//!
//! let features = Arc::new(FlagSet::new());
//! let (scream, _) = features.new_flag("scream");
//! let admin = features.admin().unwrap();
//!
//! let response = admin.serve(&HttpRequest::post("/features/scream?enabled=true"));
//! assert_eq!(response.status, 200);
//! assert_eq!(response.body_string(), "scream: true");
//! assert!(scream.is_enabled());
//! ```

mod admin;
mod config;
mod error;
mod flag;
mod params;
mod set;
mod template;

pub use admin::FlagAdmin;
pub use config::AdminConfig;
pub use error::{DuplicateNameError, FeatureError, FeatureResult, ParamError};
pub use flag::{BooleanFlag, Flag, RatioFlag, RenderableFlag, SettableFlag};
pub use params::{ENABLED, RATIO, is_blank, parse_bool, parse_ratio, require_enabled};
pub use set::FlagSet;
pub use template::{
    BOOLEAN_TEMPLATE, INDEX_TEMPLATE, PLAIN_TEMPLATE, RATIO_TEMPLATE, TemplateEngine,
};
