// Error types for flagset handlers

use crate::{HttpResponse, HttpStatus};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl Error {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.http_status().code()
    }

    /// Get the HttpStatus enum for this error
    pub fn http_status(&self) -> HttpStatus {
        match self {
            Error::BadRequest(_) | Error::Validation(_) => HttpStatus::BadRequest,
            Error::NotFound(_) => HttpStatus::NotFound,
            Error::MethodNotAllowed(_) => HttpStatus::MethodNotAllowed,
            Error::Internal(_) => HttpStatus::InternalServerError,
        }
    }

    /// The message meant for the requester, without the category prefix
    pub fn message(&self) -> &str {
        match self {
            Error::BadRequest(msg)
            | Error::Validation(msg)
            | Error::NotFound(msg)
            | Error::MethodNotAllowed(msg)
            | Error::Internal(msg) => msg,
        }
    }

    /// Render this error as a plain-text response.
    ///
    /// The body is the message followed by a newline.
    pub fn to_response(&self) -> HttpResponse {
        HttpResponse::new(self.status_code())
            .with_header("Content-Type", "text/plain; charset=utf-8")
            .with_header("X-Content-Type-Options", "nosniff")
            .with_body(format!("{}\n", self.message()).into_bytes())
    }
}

impl From<Error> for HttpResponse {
    fn from(err: Error) -> Self {
        err.to_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(Error::BadRequest("x".into()).status_code(), 400);
        assert_eq!(Error::Validation("x".into()).status_code(), 400);
        assert_eq!(Error::NotFound("x".into()).status_code(), 404);
        assert_eq!(Error::MethodNotAllowed("x".into()).status_code(), 405);
        assert_eq!(Error::Internal("x".into()).status_code(), 500);
    }

    #[test]
    fn test_to_response() {
        let response = Error::NotFound("no such feature".into()).to_response();

        assert_eq!(response.status, 404);
        assert_eq!(response.body, b"no such feature\n".to_vec());
        assert_eq!(
            response.header("content-type"),
            Some("text/plain; charset=utf-8")
        );
        assert_eq!(response.header("X-Content-Type-Options"), Some("nosniff"));
    }
}
