//! DuckDuckGo HTML search client
//!
//! Queries the HTML endpoint (<https://html.duckduckgo.com/html/>) and scrapes
//! the ranked result links from the listing page.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use domain::{SearchResult, distinct_by_host};
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, instrument};

use crate::{
    config::WebSearchConfig, error::WebSearchError, provider::SearchProvider,
    redirect::resolve_redirect_url,
};

/// Anchors of the organic results in the listing page
const RESULT_LINK_SELECTOR: &str = ".result__title a";

/// DuckDuckGo HTML search client
#[derive(Debug)]
pub struct DuckDuckGoHtmlClient {
    client: Client,
    base_url: String,
    provider_host: String,
    timeout_secs: u64,
    max_results: usize,
}

impl DuckDuckGoHtmlClient {
    /// Create a new DuckDuckGo client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &WebSearchConfig) -> Result<Self, WebSearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| WebSearchError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            provider_host: config.provider_host.to_lowercase(),
            timeout_secs: config.timeout_secs,
            max_results: config.max_results,
        })
    }

    /// Build the listing URL for `query`
    fn build_url(&self, query: &str) -> String {
        format!("{}/html/?q={}", self.base_url, urlencoding::encode(query))
    }

    /// Whether `host` belongs to the search provider itself
    fn is_provider_host(&self, host: &str) -> bool {
        host == self.provider_host
            || host
                .strip_suffix(self.provider_host.as_str())
                .is_some_and(|prefix| prefix.ends_with('.'))
    }

    /// Extract results from a listing page
    ///
    /// Links are resolved through the provider's redirect wrapper. Links that
    /// are not http(s), point back to the provider, or repeat an earlier
    /// host are dropped. At most `limit` results are kept, in listing order.
    fn parse_listing(&self, html: &str, limit: usize) -> Result<Vec<SearchResult>, WebSearchError> {
        let selector = Selector::parse(RESULT_LINK_SELECTOR)
            .map_err(|e| WebSearchError::ParseError(e.to_string()))?;
        let document = Html::parse_document(html);

        let candidates = document.select(&selector).filter_map(|anchor| {
            let href = anchor.value().attr("href")?;
            let url = resolve_redirect_url(href);
            if !url.starts_with("http") {
                return None;
            }

            let title = anchor.text().collect::<String>().trim().to_string();
            let result = SearchResult::new(title, url).ok()?;
            if self.is_provider_host(result.host()) {
                return None;
            }
            Some(result)
        });

        Ok(distinct_by_host(candidates, limit))
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoHtmlClient {
    #[instrument(skip(self), fields(provider = "duckduckgo"))]
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, WebSearchError> {
        if query.trim().is_empty() {
            return Err(WebSearchError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }

        let url = self.build_url(query);
        let start = Instant::now();

        debug!(url = %url, "Sending DuckDuckGo request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WebSearchError::from_reqwest(&e, self.timeout_secs))?;

        let status = response.status();
        debug!(status = %status, "Received DuckDuckGo response");

        if !status.is_success() {
            return Err(WebSearchError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| WebSearchError::from_reqwest(&e, self.timeout_secs))?;

        let results = self.parse_listing(&body, max_results.min(self.max_results))?;

        debug!(
            results = results.len(),
            time_ms = start.elapsed().as_millis(),
            "DuckDuckGo search completed"
        );

        Ok(results)
    }

    fn provider_name(&self) -> &'static str {
        "duckduckgo"
    }
}
