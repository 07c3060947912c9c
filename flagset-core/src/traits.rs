// Core traits for flagset handlers

use async_trait::async_trait;
use std::sync::Arc;

/// Trait for request handlers
///
/// Errors are returned as values; callers that need a wire response turn
/// them into one with [`crate::Error::to_response`].
#[async_trait]
pub trait RequestHandler: Send + Sync {
    /// Handle an HTTP request and return a response
    async fn handle(
        &self,
        request: crate::HttpRequest,
    ) -> Result<crate::HttpResponse, crate::Error>;
}

#[async_trait]
impl<H: RequestHandler + ?Sized> RequestHandler for Arc<H> {
    async fn handle(
        &self,
        request: crate::HttpRequest,
    ) -> Result<crate::HttpResponse, crate::Error> {
        (**self).handle(request).await
    }
}

/// HTTP methods
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    DELETE,
    PATCH,
    HEAD,
    OPTIONS,
}

impl HttpMethod {
    /// Parse a method token. Methods are case-sensitive, so `post` is not
    /// `POST`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(HttpMethod::GET),
            "POST" => Some(HttpMethod::POST),
            "PUT" => Some(HttpMethod::PUT),
            "DELETE" => Some(HttpMethod::DELETE),
            "PATCH" => Some(HttpMethod::PATCH),
            "HEAD" => Some(HttpMethod::HEAD),
            "OPTIONS" => Some(HttpMethod::OPTIONS),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::HEAD => "HEAD",
            HttpMethod::OPTIONS => "OPTIONS",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, HttpRequest, HttpResponse};

    struct Echo;

    #[async_trait]
    impl RequestHandler for Echo {
        async fn handle(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
            if request.method == "GET" {
                Ok(HttpResponse::text(request.path))
            } else {
                Err(Error::MethodNotAllowed(request.method))
            }
        }
    }

    #[test]
    fn test_method_round_trip() {
        for method in ["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS"] {
            let parsed = HttpMethod::from_str(method).unwrap();
            assert_eq!(parsed.as_str(), method);
        }
        assert_eq!(HttpMethod::from_str("CONNECT"), None);
    }

    #[test]
    fn test_method_is_case_sensitive() {
        assert_eq!(HttpMethod::from_str("post"), None);
        assert_eq!(HttpMethod::from_str("Get"), None);
    }

    #[tokio::test]
    async fn test_arc_handler_delegates() {
        let handler: Arc<dyn RequestHandler> = Arc::new(Echo);

        let response = handler.handle(HttpRequest::get("/ping")).await.unwrap();
        assert_eq!(response.body_string(), "/ping");

        let err = handler
            .handle(HttpRequest::new("DELETE", "/ping"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 405);
    }
}
