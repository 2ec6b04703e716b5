//! Summarization engine port
//!
//! The abstractive summarization engine is an external collaborator that may
//! be slow to start or unavailable; see `SummarizerHandle` for its lifecycle.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Requested length window for a summary, in engine-defined units (tokens)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLength {
    /// Minimum summary length
    pub min: u32,
    /// Maximum summary length
    pub max: u32,
}

impl SummaryLength {
    /// Create a length window
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Port for abstractive summarization engines
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SummarizationEnginePort: Send + Sync {
    /// Summarize `text` within the given length window
    ///
    /// # Errors
    /// Returns an error if the engine fails or returns no summary.
    async fn summarize(
        &self,
        text: &str,
        length: SummaryLength,
    ) -> Result<String, ApplicationError>;

    /// Name of the engine/model producing summaries
    fn engine_name(&self) -> &str;
}
