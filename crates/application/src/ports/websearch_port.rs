//! Web search service port
//!
//! Defines the interface for querying an external search provider and
//! receiving its ranked listing.

use async_trait::async_trait;
use domain::SearchResult;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for web search operations
///
/// Implementations issue exactly one request per call and return the
/// provider's listing in ranked order, with the provider's own links removed.
#[allow(clippy::struct_field_names)] // automock generates struct with prefixes
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WebSearchPort: Send + Sync {
    /// Perform a web search with the given query
    ///
    /// # Arguments
    /// * `query` - The search query string
    /// * `max_results` - Maximum number of results to return
    ///
    /// # Errors
    /// Returns an error on network failure or if the listing cannot be parsed.
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, ApplicationError>;

    /// Get the name of the search provider (e.g., "duckduckgo")
    fn provider_name(&self) -> &str;
}
