/*
[INPUT]:  HTTP configuration (base URL, timeouts) and session tokens
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::error::{DepayError, Result};
use crate::session::SessionStore;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default base URL for a locally hosted DePay API
const API_BASE_URL: &str = "http://localhost:5000";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the DePay API
#[derive(Debug, Clone)]
pub struct DepayClient {
    http_client: Client,
    api_base_url: Url,
    timeout: Duration,
    session: SessionStore,
}

impl DepayClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, API_BASE_URL)
    }

    /// Create a new client against a specific base URL
    ///
    /// Used by tests to point the client at a mock server.
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            api_base_url: Url::parse(base_url)?,
            timeout: config.timeout,
            session: SessionStore::new(),
        })
    }

    /// Access the session store backing this client
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Build full URL for an API endpoint
    fn api_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.api_base_url.join(endpoint)?)
    }

    /// Build request builder for unauthenticated endpoints
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.api_url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Build request builder carrying the session bearer token
    pub(crate) fn authed_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let token = self.session.token().ok_or(DepayError::MissingToken)?;
        Ok(self
            .request(method, endpoint)?
            .header("Authorization", format!("Bearer {}", token)))
    }

    /// Send a request and decode the JSON response
    ///
    /// Non-2xx responses are turned into `DepayError::Api`, carrying the
    /// `message` or `error` field the server puts in its error bodies.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                DepayError::Timeout {
                    duration: self.timeout.as_secs(),
                }
            } else {
                DepayError::Http(e)
            }
        })?;

        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Self::error_from_body(status, &body))
        }
    }

    /// Map an error response body to a structured API error
    fn error_from_body(status: StatusCode, body: &str) -> DepayError {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .or_else(|| value.get("error"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| {
                if body.is_empty() {
                    status.canonical_reason().unwrap_or("unknown error").to_string()
                } else {
                    body.to_string()
                }
            });

        DepayError::api_error(status, message)
    }
}
