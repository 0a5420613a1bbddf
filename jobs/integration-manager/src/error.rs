//! Job-specific error types.
//!
//! This module defines error types for the integration manager job that are
//! not covered by the client library.

use firefly_client::FireflyError;
use thiserror::Error;

/// Errors that can occur in the integration manager job.
#[derive(Debug, Error)]
pub enum JobError {
    /// Firefly API error
    #[error("Firefly error: {0}")]
    Firefly(#[from] FireflyError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
