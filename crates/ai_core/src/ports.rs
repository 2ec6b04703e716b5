//! Port definitions for summarization engines
//!
//! Defines the traits (ports) that engine adapters must implement.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// Request for a summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Text to summarize
    pub text: String,
    /// Minimum summary length (tokens)
    pub min_length: u32,
    /// Maximum summary length (tokens)
    pub max_length: u32,
}

impl SummaryRequest {
    /// Create a summary request
    pub fn new(text: impl Into<String>, min_length: u32, max_length: u32) -> Self {
        Self {
            text: text.into(),
            min_length,
            max_length,
        }
    }
}

/// Summary produced by an engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Summary text, trimmed
    pub summary: String,
    /// Model that produced the summary
    pub model: String,
    /// Number of generated tokens, if reported
    pub eval_count: Option<u32>,
}

/// Port for summarization engine implementations
#[async_trait]
pub trait SummarizationEngine: Send + Sync {
    /// Summarize the request's text
    ///
    /// An engine that answers without any text fails with
    /// [`InferenceError::EmptySummary`].
    async fn summarize(&self, request: SummaryRequest) -> Result<SummaryResponse, InferenceError>;

    /// Ask the server to load the model so later summaries are fast
    async fn warm_up(&self) -> Result<(), InferenceError>;

    /// Check if the inference server is reachable
    async fn health_check(&self) -> Result<bool, InferenceError>;

    /// Model used for summaries
    fn model(&self) -> &str;
}
