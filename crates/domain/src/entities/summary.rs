//! Summary entities produced by the pipeline

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::web_search::hostname_of;

/// Summary of a single source page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SourceSummary {
    /// Title of the source, taken from the search listing
    pub title: String,

    /// URL of the source page
    pub url: String,

    /// Summary of the relevant content on the page
    pub summary: String,

    /// Whether the summary came from the sentence fallback instead of the engine
    #[serde(default)]
    pub used_fallback: bool,
}

impl SourceSummary {
    /// Create a new source summary
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        summary: impl Into<String>,
        used_fallback: bool,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            summary: summary.into(),
            used_fallback,
        }
    }

    /// Hostname of the source URL
    #[must_use]
    pub fn host(&self) -> Option<String> {
        hostname_of(&self.url)
    }
}

/// Complete output of one end-to-end query
///
/// Serialized field names (`query`, `summary`, `finalSummary`) match what the
/// result view renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PipelineResult {
    /// The query as submitted
    pub query: String,

    /// Per-source summaries, at most one per hostname, in search order
    pub summary: Vec<SourceSummary>,

    /// Summary synthesized across all source summaries
    pub final_summary: String,

    /// Whether the final summary came from the sentence fallback
    #[serde(default)]
    pub used_fallback: bool,
}

impl PipelineResult {
    /// Create a pipeline result
    #[must_use]
    pub fn new(
        query: impl Into<String>,
        summary: Vec<SourceSummary>,
        final_summary: impl Into<String>,
        used_fallback: bool,
    ) -> Self {
        Self {
            query: query.into(),
            summary,
            final_summary: final_summary.into(),
            used_fallback,
        }
    }

    /// Result for a query where no source qualified
    #[must_use]
    pub fn no_results(query: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(query, Vec::new(), message, false)
    }

    /// Check that no two source summaries share a hostname
    #[must_use]
    pub fn hosts_are_distinct(&self) -> bool {
        let mut seen = HashSet::new();
        self.summary
            .iter()
            .all(|s| s.host().is_some_and(|host| seen.insert(host)))
    }
}
