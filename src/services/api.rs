//! Achievements REST API client
//!
//! Thin wrapper over `reqwest` that talks JSON to the achievements backend.
//! Every request, response and failure is logged; calls are single-attempt
//! and errors are handed back to the caller classified by kind.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::utils::errors::{AdminError, ApiError, ApiResult, Result};
use crate::utils::logging;

/// Client for the achievements API
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("achievements-admin/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(AdminError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a path and decode the JSON body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let value = self.send::<Value>(Method::GET, path, None).await?;
        self.decode(path, value)
    }

    /// POST a JSON body, returning whatever the backend answered
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Value> {
        self.send(Method::POST, path, Some(body)).await
    }

    /// PATCH a JSON body, returning whatever the backend answered
    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Value> {
        self.send(Method::PATCH, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.send::<Value>(Method::DELETE, path, None).await.map(|_| ())
    }

    /// Probe the backend root endpoint, returning its HTTP status
    pub async fn ping(&self) -> ApiResult<u16> {
        let url = self.url("/");
        logging::log_api_request("GET", &url, None);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::classify("GET", &url, e))
            .inspect_err(logging::log_api_error)?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let error = ApiError::Status {
                method: "GET".to_string(),
                url,
                status,
                body: String::new(),
            };
            logging::log_api_error(&error);
            return Err(error);
        }

        logging::log_api_response("GET", &url, status);
        Ok(status)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<Value> {
        let url = self.url(path);
        let method_name = method.as_str().to_string();

        let payload = body.and_then(|body| serde_json::to_value(body).ok());
        logging::log_api_request(&method_name, &url, payload.as_ref());

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Self::classify(&method_name, &url, e))
            .inspect_err(logging::log_api_error)?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Self::classify(&method_name, &url, e))
            .inspect_err(logging::log_api_error)?;

        if !status.is_success() {
            let error = ApiError::Status {
                method: method_name,
                url,
                status: status.as_u16(),
                body: text,
            };
            logging::log_api_error(&error);
            return Err(error);
        }

        logging::log_api_response(&method_name, &url, status.as_u16());

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text)
            .map_err(|e| ApiError::InvalidResponse {
                url,
                message: e.to_string(),
            })
            .inspect_err(logging::log_api_error)
    }

    fn decode<T: DeserializeOwned>(&self, path: &str, value: Value) -> ApiResult<T> {
        serde_json::from_value(value)
            .map_err(|e| ApiError::InvalidResponse {
                url: self.url(path),
                message: e.to_string(),
            })
            .inspect_err(logging::log_api_error)
    }

    fn classify(method: &str, url: &str, error: reqwest::Error) -> ApiError {
        if error.is_timeout() {
            ApiError::Timeout {
                method: method.to_string(),
                url: url.to_string(),
            }
        } else if error.is_decode() {
            ApiError::InvalidResponse {
                url: url.to_string(),
                message: error.to_string(),
            }
        } else {
            ApiError::Network {
                method: method.to_string(),
                url: url.to_string(),
                message: error.to_string(),
            }
        }
    }
}
