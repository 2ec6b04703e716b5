//! Page content adapter - Implements PageContentPort using integration_websearch

use application::error::ApplicationError;
use application::ports::PageContentPort;
use async_trait::async_trait;
use integration_websearch::{PageFetchConfig, PageFetcher};
use tracing::instrument;

use super::websearch_adapter::map_error;

/// Adapter fetching candidate pages and splitting them into text blocks
#[derive(Debug, Clone)]
pub struct PageContentAdapter {
    fetcher: PageFetcher,
}

impl PageContentAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &PageFetchConfig) -> Result<Self, ApplicationError> {
        let fetcher =
            PageFetcher::new(config).map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { fetcher })
    }
}

#[async_trait]
impl PageContentPort for PageContentAdapter {
    #[instrument(skip(self))]
    async fn fetch_text_blocks(&self, url: &str) -> Result<Vec<String>, ApplicationError> {
        self.fetcher.fetch_text_blocks(url).await.map_err(map_error)
    }
}
