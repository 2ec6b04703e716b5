//! Inference errors

use thiserror::Error;

/// Errors that can occur during summarization
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Failed to connect to inference server
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to inference server failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Model not found or not loaded
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Response parsing failed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during inference
    #[error("Inference timeout after {0}ms")]
    Timeout(u64),

    /// Server error
    #[error("Server error: {0}")]
    ServerError(String),

    /// Engine answered but produced no summary text
    #[error("Engine returned an empty summary")]
    EmptySummary,
}

impl InferenceError {
    /// Classify a reqwest error, reporting `timeout_ms` on timeouts
    #[must_use]
    pub fn from_reqwest(err: &reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_ms)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }

    /// Returns true if the server could not be reached or did not answer in time
    #[must_use]
    pub const fn is_unreachable(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_) | Self::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_errors() {
        assert!(InferenceError::ConnectionFailed("refused".to_string()).is_unreachable());
        assert!(InferenceError::Timeout(500).is_unreachable());
        assert!(!InferenceError::EmptySummary.is_unreachable());
        assert!(!InferenceError::ModelNotAvailable("t5".to_string()).is_unreachable());
    }

    #[test]
    fn timeout_display_includes_duration() {
        assert_eq!(
            InferenceError::Timeout(1500).to_string(),
            "Inference timeout after 1500ms"
        );
    }
}
