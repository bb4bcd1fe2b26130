//! Error handling for the Hidden Haul client

use std::fmt;
use thiserror::Error;

/// Unified error type for the Hidden Haul client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Local storage I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The API rejected the request with a non-success status
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Response body text, if any
        message: String,
    },

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Auth(String),

    /// General errors
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Create a new API-status error
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Error::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a new authentication error
    pub fn auth<T: fmt::Display>(msg: T) -> Self {
        Error::Auth(msg.to_string())
    }

    /// Create a new general error
    pub fn general<T: fmt::Display>(msg: T) -> Self {
        Error::General(msg.to_string())
    }

    /// Whether this error is an authentication failure (HTTP 401)
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Error::Api { status: 401, .. })
    }
}
