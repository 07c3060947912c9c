// Core HTTP primitives for flagset
// Requests, responses, status codes, form decoding and the handler trait

pub mod error;
pub mod form;
pub mod http;
pub mod status;
pub mod traits;

pub use error::*;
pub use form::*;
pub use http::*;
pub use status::*;
pub use traits::*;
