// Test assertions for HTTP responses

use crate::TestResponse;
use flagset_core::{HttpResponse, HttpStatus};

/// Assert that a response has a specific status code
pub fn assert_status(response: &TestResponse, expected: u16) {
    let actual = response.status();
    assert_eq!(
        actual, expected,
        "Expected status {}, got {} (body: {:?})",
        expected,
        actual,
        response.body_string()
    );
}

/// Assert that a response has a specific HTTP status
pub fn assert_http_status(response: &HttpResponse, expected: HttpStatus) {
    assert_eq!(
        response.status,
        expected.code(),
        "Expected status {}, got {}",
        expected,
        response.status
    );
}

/// Assert that a response has a specific header
pub fn assert_header(response: &TestResponse, key: &str, expected: &str) {
    let actual = response.header(key);
    assert_eq!(
        actual,
        Some(expected),
        "Expected header '{}' to be '{}', got {:?}",
        key,
        expected,
        actual
    );
}

/// Assert that a response body is exactly `expected`
pub fn assert_body(response: &TestResponse, expected: &str) {
    assert_eq!(response.body_string(), expected, "Response bodies do not match");
}

/// Assert that a response body contains a string
pub fn assert_body_contains(response: &TestResponse, expected: &str) {
    let body = response.body_string();
    assert!(
        body.contains(expected),
        "Expected body to contain '{}', but it didn't. Body: {}",
        expected,
        body
    );
}

/// Assert that a response is a client error (4xx status)
pub fn assert_client_error(response: &TestResponse) {
    let status = response.status();
    assert!(
        (400..500).contains(&status),
        "Expected client error status (4xx), got {}",
        status
    );
}

/// Assert that a response has HTML content type
pub fn assert_html_content_type(response: &TestResponse) {
    let content_type = response.header("Content-Type");
    assert!(
        content_type.is_some_and(|ct| ct.contains("text/html")),
        "Expected HTML content type, got {:?}",
        content_type
    );
}
