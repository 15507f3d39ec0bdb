/*
[INPUT]:  Error sources (HTTP, API, validation, serialization)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Obelisk adapter
#[derive(Error, Debug)]
pub enum ObeliskError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (code {code}): {message}")]
    Api { code: i32, message: String },

    /// Task params text is not well-formed JSON; detected before any
    /// network call is made
    #[error("Invalid task params: {message}")]
    InvalidParams { message: String },

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

impl ObeliskError {
    /// Check if the error is retryable on a later poll tick
    pub fn is_retryable(&self) -> bool {
        match self {
            ObeliskError::Http(_) | ObeliskError::InvalidResponse(_) => true,
            ObeliskError::Api { code, .. } => *code >= 500,
            _ => false,
        }
    }

    /// Check if the error was raised locally, before any request left
    /// the client
    pub fn is_validation_error(&self) -> bool {
        matches!(self, ObeliskError::InvalidParams { .. })
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        ObeliskError::Api {
            code: status.as_u16() as i32,
            message: message.into(),
        }
    }
}

/// Result type alias for Obelisk operations
pub type Result<T> = std::result::Result<T, ObeliskError>;
