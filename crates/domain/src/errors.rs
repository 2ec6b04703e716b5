//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// URL could not be parsed or is not an absolute http(s) URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// URL has no host component
    #[error("URL has no host: {0}")]
    MissingHost(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
