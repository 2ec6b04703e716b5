//! Search provider trait

use async_trait::async_trait;
use domain::SearchResult;

use crate::WebSearchError;

/// Trait for web search providers
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Perform a web search
    ///
    /// # Arguments
    ///
    /// * `query` - The search query string
    /// * `max_results` - Maximum number of results to return
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the listing cannot be parsed.
    /// An empty listing is not an error.
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, WebSearchError>;

    /// Get the provider name (e.g., "duckduckgo")
    fn provider_name(&self) -> &'static str;
}
