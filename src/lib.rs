// flagset - Runtime feature flags for Rust services
//
// Named boolean and ratio flags kept in a thread-safe registry, with an HTTP
// handler for listing and flipping them while the process runs.

// Re-export core functionality
pub use flagset_core::*;
pub use flagset_features::*;

pub use flagset_log as log;

#[cfg(feature = "testing")]
pub use flagset_testing;

/// Commonly used types for application code.
pub mod prelude {
    pub use flagset_core::{Error, HttpRequest, HttpResponse, RequestHandler};
    pub use flagset_features::{
        AdminConfig, BooleanFlag, Flag, FlagAdmin, FlagSet, RatioFlag, RenderableFlag,
        SettableFlag,
    };
}
