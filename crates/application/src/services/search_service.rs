//! Search service
//!
//! Wraps the search provider with memoization and failure absorption: a
//! failed search yields an empty listing and is never cached.

use std::sync::Arc;

use domain::{SearchResult, distinct_by_host};
use tracing::{debug, info, instrument, warn};

use super::query_cache::{CacheKey, QueryResultCache};
use crate::ports::WebSearchPort;

/// Cached access to the web search provider
pub struct SearchService {
    provider: Arc<dyn WebSearchPort>,
    cache: Arc<QueryResultCache>,
    max_results: usize,
}

impl std::fmt::Debug for SearchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchService")
            .field("provider", &self.provider.provider_name())
            .field("max_results", &self.max_results)
            .finish_non_exhaustive()
    }
}

impl SearchService {
    /// Create a new search service
    #[must_use]
    pub fn new(
        provider: Arc<dyn WebSearchPort>,
        cache: Arc<QueryResultCache>,
        max_results: usize,
    ) -> Self {
        Self {
            provider,
            cache,
            max_results,
        }
    }

    /// Ranked results for `query`, at most one per hostname
    ///
    /// `None` when the provider failed; callers treat that as an empty
    /// listing that must not be memoized. Identical queries reuse the first
    /// successful listing, and concurrent calls for the same query wait for
    /// the first one instead of issuing their own request.
    #[instrument(skip(self), fields(provider = self.provider.provider_name()))]
    pub async fn try_search(&self, query: &str) -> Option<Vec<SearchResult>> {
        let key = CacheKey::RawSearch(query.to_string());
        let _guard = self.cache.lock(&key).await;

        if let Some(cached) = self.cache.search_results(query).await {
            debug!(count = cached.len(), "Using cached search results");
            return Some(cached);
        }

        match self.provider.search(query, self.max_results).await {
            Ok(results) => {
                let results = distinct_by_host(results, self.max_results);
                info!(count = results.len(), "Search completed");
                self.cache.store_search_results(query, &results).await;
                Some(results)
            },
            Err(e) => {
                let outcome = if e.is_network_failure() {
                    "search_unreachable"
                } else {
                    "search_failed"
                };
                warn!(error = %e, outcome, "Search failed, continuing without results");
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ApplicationError,
        ports::MockWebSearchPort,
        services::test_support::{FakeSearch, MemoryCache},
    };

    fn result(title: &str, url: &str) -> SearchResult {
        SearchResult::new(title, url).unwrap()
    }

    fn cache() -> Arc<QueryResultCache> {
        Arc::new(QueryResultCache::new(Arc::new(MemoryCache::new())))
    }

    #[tokio::test]
    async fn second_search_is_served_from_cache() {
        let provider = Arc::new(FakeSearch::new(vec![result("Rust", "https://rust-lang.org/")]));
        let service = SearchService::new(provider.clone(), cache(), 10);

        let first = service.try_search("rust").await.unwrap_or_default();
        let second = service.try_search("rust").await.unwrap_or_default();

        assert_eq!(first, second);
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn failed_search_is_empty_and_not_cached() {
        let mut mock = MockWebSearchPort::new();
        mock.expect_provider_name().return_const("mock".to_string());
        mock.expect_search()
            .times(2)
            .returning(|_, _| Err(ApplicationError::ExternalService("unreachable".to_string())));

        let service = SearchService::new(Arc::new(mock), cache(), 10);

        assert!(service.try_search("rust").await.is_none());
        // Retried because the failure was not memoized
        assert!(service.try_search("rust").await.is_none());
    }

    #[tokio::test]
    async fn genuine_empty_listing_is_cached() {
        let provider = Arc::new(FakeSearch::new(Vec::new()));
        let service = SearchService::new(provider.clone(), cache(), 10);

        assert_eq!(service.try_search("nothing").await, Some(Vec::new()));
        assert_eq!(service.try_search("nothing").await, Some(Vec::new()));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn duplicate_hosts_are_removed() {
        let provider = Arc::new(FakeSearch::new(vec![
            result("A", "https://a.com/1"),
            result("A again", "https://a.com/2"),
            result("B", "https://b.com/"),
        ]));
        let service = SearchService::new(provider, cache(), 10);

        let results = service.try_search("rust").await.unwrap_or_default();
        let hosts: Vec<_> = results.iter().map(SearchResult::host).collect();
        assert_eq!(hosts, vec!["a.com", "b.com"]);
    }

    #[tokio::test]
    async fn results_are_capped() {
        let listing = (0..15)
            .map(|i| result(&format!("R{i}"), &format!("https://site{i}.com/")))
            .collect();
        let service = SearchService::new(Arc::new(FakeSearch::new(listing)), cache(), 10);

        assert_eq!(service.try_search("rust").await.unwrap_or_default().len(), 10);
    }

    #[tokio::test]
    async fn concurrent_identical_searches_issue_one_request() {
        let provider = Arc::new(FakeSearch::new(vec![result("Rust", "https://rust-lang.org/")]));
        let service = Arc::new(SearchService::new(provider.clone(), cache(), 10));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let service = Arc::clone(&service);
                tokio::spawn(async move { service.try_search("rust").await.unwrap_or_default() })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap().len(), 1);
        }
        assert_eq!(provider.calls(), 1);
    }
}
