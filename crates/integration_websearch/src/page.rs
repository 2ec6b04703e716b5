//! Candidate page fetching
//!
//! Each page gets a HEAD probe with a short timeout before the full GET, so
//! unreachable hosts are abandoned quickly. Nothing is retried.

use std::time::Duration;

use reqwest::{Client, Response};
use tracing::{debug, instrument};

use crate::{config::PageFetchConfig, error::WebSearchError, extract::text_blocks};

/// HTTP client for fetching candidate pages
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    probe_timeout: Duration,
    fetch_timeout: Duration,
}

impl PageFetcher {
    /// Create a new page fetcher
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &PageFetchConfig) -> Result<Self, WebSearchError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| WebSearchError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            client,
            probe_timeout: Duration::from_secs(config.probe_timeout_secs),
            fetch_timeout: Duration::from_secs(config.fetch_timeout_secs),
        })
    }

    /// Probe and fetch `url`, returning the response body
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not http(s), either request fails or
    /// times out, or either response has a non-success status.
    #[instrument(skip(self))]
    pub async fn fetch_html(&self, url: &str) -> Result<String, WebSearchError> {
        let parsed = url::Url::parse(url).map_err(|_| WebSearchError::InvalidUrl(url.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(WebSearchError::InvalidUrl(url.to_string()));
        }

        let probe = self
            .client
            .head(parsed.clone())
            .timeout(self.probe_timeout)
            .send()
            .await
            .map_err(|e| WebSearchError::from_reqwest(&e, self.probe_timeout.as_secs()))?;
        ensure_success(&probe, url)?;
        debug!(status = %probe.status(), "Probe succeeded");

        let response = self
            .client
            .get(parsed)
            .timeout(self.fetch_timeout)
            .send()
            .await
            .map_err(|e| WebSearchError::from_reqwest(&e, self.fetch_timeout.as_secs()))?;
        ensure_success(&response, url)?;

        response
            .text()
            .await
            .map_err(|e| WebSearchError::from_reqwest(&e, self.fetch_timeout.as_secs()))
    }

    /// Probe and fetch `url`, returning the text of its content blocks
    ///
    /// # Errors
    ///
    /// See [`fetch_html`](Self::fetch_html).
    pub async fn fetch_text_blocks(&self, url: &str) -> Result<Vec<String>, WebSearchError> {
        let html = self.fetch_html(url).await?;
        let blocks = text_blocks(&html);
        debug!(url = %url, blocks = blocks.len(), "Extracted content blocks");
        Ok(blocks)
    }
}

fn ensure_success(response: &Response, url: &str) -> Result<(), WebSearchError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(WebSearchError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}
