//! Mock achievements API for testing
//!
//! This module provides a mock HTTP server that simulates the achievements
//! REST API. It uses wiremock to create configurable mock responses and to
//! inspect the requests the console sent.

use achievements_admin::config::{ApiConfig, Settings};
use achievements_admin::{ApiClient, AppState};
use serde_json::Value;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

/// Mock achievements API server for testing
pub struct BackendMockServer {
    pub server: MockServer,
}

impl BackendMockServer {
    /// Create a new mock API server
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// API configuration pointing at this server
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.uri(),
            timeout_seconds: 2,
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.api_config()).expect("Failed to build API client")
    }

    /// Application state whose API client targets this server
    pub fn app_state(&self) -> AppState {
        let mut settings = Settings::default();
        settings.api = self.api_config();
        AppState::new(settings).expect("Failed to build application state")
    }

    /// Respond to `GET {route}` with a JSON body
    pub async fn mock_get(&self, route: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Respond to `{verb} {route}` with a bare status
    pub async fn mock_status(&self, verb: &str, route: &str, status: u16) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Respond to `{verb} {route}` with a status and JSON body
    pub async fn mock_json(&self, verb: &str, route: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Respond to `GET {route}` after a delay
    pub async fn mock_slow_get(&self, route: &str, delay: std::time::Duration) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(vec![])).set_delay(delay))
            .mount(&self.server)
            .await;
    }

    /// All requests received so far, in arrival order
    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Number of `{verb} {route}` requests received
    pub async fn count(&self, verb: &str, route: &str) -> usize {
        self.requests()
            .await
            .iter()
            .filter(|request| request.method.as_str() == verb && request.url.path() == route)
            .count()
    }

    /// JSON bodies of the `{verb} {route}` requests received
    pub async fn bodies(&self, verb: &str, route: &str) -> Vec<Value> {
        self.requests()
            .await
            .iter()
            .filter(|request| request.method.as_str() == verb && request.url.path() == route)
            .map(|request| request.body_json::<Value>().expect("Request body is not JSON"))
            .collect()
    }

    /// `METHOD path` of every received request
    pub async fn request_log(&self) -> Vec<String> {
        self.requests()
            .await
            .iter()
            .map(|request| format!("{} {}", request.method, request.url.path()))
            .collect()
    }
}
