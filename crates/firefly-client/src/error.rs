//! Firefly client errors

use thiserror::Error;

/// Errors that can occur when interacting with the Firefly API
#[derive(Debug, Error)]
pub enum FireflyError {
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Firefly API returned an error
    #[error("Firefly API error: {0}")]
    Api(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FireflyError {
    /// Whether the login retry policy should retry after this error.
    ///
    /// Transport failures and non-2xx responses are retryable; a 2xx
    /// response with a malformed body is not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Api(_))
    }
}
