//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Summarization engine error
    #[error("Inference error: {0}")]
    Inference(String),

    /// External service error (connection, non-success status)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// External call did not complete in time
    #[error("Timed out: {0}")]
    Timeout(String),

    /// Response from an external service could not be understood
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error was caused by the network (connection, status, timeout)
    pub const fn is_network_failure(&self) -> bool {
        matches!(self, Self::ExternalService(_) | Self::Timeout(_))
    }
}
