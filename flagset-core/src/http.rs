// HTTP request and response types

use crate::{HttpMethod, HttpStatus};
use std::collections::HashMap;

/// HTTP request wrapper
///
/// `path` is the request target as received, so it may still carry a
/// `?query` suffix. Header names are matched case-insensitively by
/// [`HttpRequest::header`].
#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new("GET", path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new("POST", path)
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Parsed request method, `None` for methods outside [`HttpMethod`]
    pub fn http_method(&self) -> Option<HttpMethod> {
        HttpMethod::from_str(&self.method)
    }

    /// Get a header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// The path without its query string
    pub fn path_only(&self) -> &str {
        self.path
            .split_once('?')
            .map_or(self.path.as_str(), |(path, _)| path)
    }

    /// The raw query string, without the leading `?`
    pub fn query_string(&self) -> Option<&str> {
        self.path.split_once('?').map(|(_, query)| query)
    }

    /// The media type of the `Content-Type` header, lowercased and
    /// stripped of parameters such as `charset`
    pub fn media_type(&self) -> Option<String> {
        self.header("Content-Type").map(|value| {
            value
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase()
        })
    }

    /// Whether the `Accept` header mentions `fragment` anywhere
    pub fn accepts(&self, fragment: &str) -> bool {
        self.header("Accept")
            .is_some_and(|accept| accept.contains(fragment))
    }
}

/// HTTP response wrapper
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    pub fn ok() -> Self {
        Self::new(HttpStatus::Ok.code())
    }

    /// 200 with a `text/plain` body
    pub fn text(body: impl Into<String>) -> Self {
        Self::ok()
            .with_header("Content-Type", "text/plain; charset=utf-8")
            .with_body(body.into().into_bytes())
    }

    /// 200 with a `text/html` body
    pub fn html(body: impl Into<String>) -> Self {
        Self::ok()
            .with_header("Content-Type", "text/html; charset=utf-8")
            .with_body(body.into().into_bytes())
    }

    /// 307 pointing at `location`
    pub fn temporary_redirect(location: impl Into<String>) -> Self {
        Self::new(HttpStatus::TemporaryRedirect.code()).with_header("Location", location)
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Get a header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

fn find_header<'a>(headers: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}
