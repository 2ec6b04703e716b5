//! Web search and page fetch error types

use thiserror::Error;

/// Errors that can occur during search and page fetch operations
#[derive(Debug, Error)]
pub enum WebSearchError {
    /// Connection to the remote host failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Remote host answered with a non-success status
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        /// Status code returned
        status: u16,
        /// URL that was requested
        url: String,
    },

    /// Failed to parse a response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Search query is invalid or empty
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// URL is not an absolute http(s) URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl WebSearchError {
    /// Classify a reqwest error, reporting `timeout_secs` on timeouts
    #[must_use]
    pub fn from_reqwest(error: &reqwest::Error, timeout_secs: u64) -> Self {
        if error.is_timeout() {
            Self::Timeout { timeout_secs }
        } else if error.is_connect() {
            Self::ConnectionFailed(error.to_string())
        } else {
            Self::RequestFailed(error.to_string())
        }
    }

    /// Returns true if the error came from the network rather than content
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::HttpStatus { .. }
                | Self::Timeout { .. }
        )
    }
}
