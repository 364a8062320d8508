/*
[INPUT]:  Error sources (HTTP transport, API rejections, serialization, session)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the DePay adapter
#[derive(Error, Debug)]
pub enum DepayError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (code {code}): {message}")]
    Api { code: i32, message: String },

    /// No session token is available for an authenticated call
    #[error("No session token set, please log in first")]
    MissingToken,

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection timeout
    #[error("Connection timeout after {duration}s")]
    Timeout { duration: u64 },
}

impl DepayError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DepayError::Http(_) | DepayError::Timeout { .. } | DepayError::InvalidResponse(_)
        )
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        match self {
            DepayError::MissingToken => true,
            DepayError::Api { code, .. } => *code == 401 || *code == 403,
            _ => false,
        }
    }

    /// Message sent by the server, if this error carries one
    ///
    /// Transport and decoding failures return `None` so callers can
    /// distinguish "the server rejected this" from "the server was never
    /// reached".
    pub fn server_message(&self) -> Option<&str> {
        match self {
            DepayError::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        DepayError::Api {
            code: status.as_u16() as i32,
            message: message.into(),
        }
    }
}

/// Result type alias for DePay operations
pub type Result<T> = std::result::Result<T, DepayError>;
