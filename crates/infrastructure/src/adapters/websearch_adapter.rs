//! Web search adapter - Implements WebSearchPort using integration_websearch

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::WebSearchPort;
use async_trait::async_trait;
use domain::SearchResult;
use integration_websearch::{DuckDuckGoHtmlClient, SearchProvider, WebSearchConfig, WebSearchError};
use tracing::{debug, instrument};

/// Adapter exposing a search provider as the application's search port
#[derive(Clone)]
pub struct WebSearchAdapter {
    provider: Arc<dyn SearchProvider>,
}

impl std::fmt::Debug for WebSearchAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebSearchAdapter")
            .field("provider", &self.provider.provider_name())
            .finish()
    }
}

impl WebSearchAdapter {
    /// Create an adapter over the DuckDuckGo HTML endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &WebSearchConfig) -> Result<Self, ApplicationError> {
        let client = DuckDuckGoHtmlClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::with_provider(Arc::new(client)))
    }

    /// Create an adapter over any search provider
    #[must_use]
    pub fn with_provider(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }
}

/// Map integration web search error to application error
///
/// Unreachable hosts, timeouts and non-success statuses become network
/// failures; everything else is reported as a bad response or internal error.
pub(crate) fn map_error(err: WebSearchError) -> ApplicationError {
    match err {
        WebSearchError::Timeout { timeout_secs } => {
            ApplicationError::Timeout(format!("Request timed out after {timeout_secs}s"))
        },
        WebSearchError::ConnectionFailed(e) | WebSearchError::RequestFailed(e) => {
            ApplicationError::ExternalService(e)
        },
        e @ WebSearchError::HttpStatus { .. } => ApplicationError::ExternalService(e.to_string()),
        WebSearchError::ParseError(e) => ApplicationError::InvalidResponse(e),
        WebSearchError::ConfigurationError(e) => ApplicationError::Configuration(e),
        e @ (WebSearchError::InvalidQuery(_) | WebSearchError::InvalidUrl(_)) => {
            ApplicationError::Internal(e.to_string())
        },
    }
}

#[async_trait]
impl WebSearchPort for WebSearchAdapter {
    #[instrument(skip(self), fields(query_len = query.len()))]
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, ApplicationError> {
        let result = self.provider.search(query, max_results).await;

        match &result {
            Ok(results) => {
                debug!(results = results.len(), "Retrieved search results");
            },
            Err(e) => {
                debug!(error = %e, "Search failed");
            },
        }

        result.map_err(map_error)
    }

    fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }
}
