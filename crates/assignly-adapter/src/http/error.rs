/*
[INPUT]:  Error sources (HTTP, API, serialization)
[OUTPUT]: Structured error types with status-code classification
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Assignly adapter
#[derive(Error, Debug)]
pub enum AssignlyError {
    /// HTTP request failed before a status line was read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error (code {code}): {message}")]
    Api { code: i32, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl AssignlyError {
    /// Check whether the server rejected the request as a duplicate (409)
    pub fn is_conflict(&self) -> bool {
        matches!(self, AssignlyError::Api { code: 409, .. })
    }

    /// Check whether the server could not locate the target resource (404)
    pub fn is_not_found(&self) -> bool {
        matches!(self, AssignlyError::Api { code: 404, .. })
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        AssignlyError::Api {
            code: status.as_u16() as i32,
            message: message.into(),
        }
    }
}

/// Result type alias for Assignly operations
pub type Result<T> = std::result::Result<T, AssignlyError>;
