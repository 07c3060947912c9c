// Test HTTP Client

use flagset_core::{
    Error, FORM_URLENCODED, HttpMethod, HttpRequest, HttpResponse, RequestHandler,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Test HTTP client that drives a handler directly, without a server
pub struct TestClient {
    handler: Arc<dyn RequestHandler>,
}

impl TestClient {
    /// Create a new test client
    pub fn new(handler: Arc<dyn RequestHandler>) -> Self {
        Self { handler }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(TestRequestBuilder::new(HttpMethod::GET, path).build())
            .await
    }

    /// Make a POST request with a raw body and no content type
    pub async fn post(&self, path: &str, body: Vec<u8>) -> TestResponse {
        self.send(TestRequestBuilder::new(HttpMethod::POST, path).body(body).build())
            .await
    }

    /// Make a POST request with an url-encoded form body
    pub async fn post_form(&self, path: &str, form: &str) -> TestResponse {
        self.send(TestRequestBuilder::new(HttpMethod::POST, path).form(form).build())
            .await
    }

    /// Make a request with custom method
    pub async fn request(&self, method: HttpMethod, path: &str) -> TestResponse {
        self.send(TestRequestBuilder::new(method, path).build()).await
    }

    /// Send a prepared request
    pub async fn send(&self, request: HttpRequest) -> TestResponse {
        match self.handler.handle(request).await {
            Ok(response) => TestResponse::Success(response),
            Err(error) => TestResponse::Error(error),
        }
    }
}

/// Builder for test requests
pub struct TestRequestBuilder {
    method: HttpMethod,
    path: String,
    headers: HashMap<String, String>,
    body: Vec<u8>,
    query_params: Vec<(String, String)>,
}

impl TestRequestBuilder {
    /// Create a new request builder
    pub fn new(method: HttpMethod, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            headers: HashMap::new(),
            body: Vec::new(),
            query_params: Vec::new(),
        }
    }

    /// Add a header
    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    /// Set the body
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Set an already encoded form body
    pub fn form(mut self, encoded: &str) -> Self {
        self.body = encoded.as_bytes().to_vec();
        self.headers
            .insert("Content-Type".to_string(), FORM_URLENCODED.to_string());
        self
    }

    /// Add a query parameter. Values are appended verbatim.
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query_params.push((key.to_string(), value.to_string()));
        self
    }

    /// Build the request
    pub fn build(self) -> HttpRequest {
        let mut path = self.path;
        if !self.query_params.is_empty() {
            let params: Vec<String> = self
                .query_params
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            path.push(if path.contains('?') { '&' } else { '?' });
            path.push_str(&params.join("&"));
        }

        HttpRequest {
            method: self.method.as_str().to_string(),
            path,
            headers: self.headers,
            body: self.body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub enum TestResponse {
    Success(HttpResponse),
    Error(Error),
}

impl TestResponse {
    /// Assert the response is successful
    pub fn assert_success(&self) -> &HttpResponse {
        match self {
            TestResponse::Success(response) => response,
            TestResponse::Error(error) => {
                panic!("Expected success response, got error: {:?}", error)
            }
        }
    }

    /// Assert the response is an error
    pub fn assert_error(&self) -> &Error {
        match self {
            TestResponse::Error(error) => error,
            TestResponse::Success(_) => {
                panic!("Expected error response, got success")
            }
        }
    }

    /// The response as a client would see it, errors included
    pub fn into_http(self) -> HttpResponse {
        match self {
            TestResponse::Success(response) => response,
            TestResponse::Error(error) => error.to_response(),
        }
    }

    /// Get the status code. Errors report the status they map to.
    pub fn status(&self) -> u16 {
        match self {
            TestResponse::Success(response) => response.status,
            TestResponse::Error(error) => error.status_code(),
        }
    }

    /// Get the response body as string
    pub fn body_string(&self) -> String {
        match self {
            TestResponse::Success(response) => response.body_string(),
            TestResponse::Error(error) => error.to_response().body_string(),
        }
    }

    /// Get a header value of a successful response
    pub fn header(&self, key: &str) -> Option<&str> {
        match self {
            TestResponse::Success(response) => response.header(key),
            TestResponse::Error(_) => None,
        }
    }
}
