//! Testing utilities for flagset.
//!
//! Drive any [`flagset_core::RequestHandler`] in-process and assert on the
//! result.
//!
//! ## Quick Start
//!
//! ```
//! use flagset_core::{Error, HttpRequest, HttpResponse, RequestHandler};
//! use flagset_testing::*;
//! use std::sync::Arc;
//!
//! struct Hello;
//!
//! #[async_trait::async_trait]
//! impl RequestHandler for Hello {
//!     async fn handle(&self, _req: HttpRequest) -> Result<HttpResponse, Error> {
//!         Ok(HttpResponse::text("Hello!"))
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let client = TestClient::new(Arc::new(Hello));
//! let response = client.get("/hello").await;
//!
//! assert_status(&response, 200);
//! assert_body(&response, "Hello!");
//! # });
//! ```

mod assertions;
mod test_client;

pub use assertions::{
    assert_body, assert_body_contains, assert_client_error, assert_header,
    assert_html_content_type, assert_http_status, assert_status,
};
pub use test_client::{TestClient, TestRequestBuilder, TestResponse};

// Re-export common testing utilities
pub use tokio::test as tokio_test;
