//! Query result cache
//!
//! Memoizes search listings and full pipeline results per query on top of a
//! [`CachePort`]. Keys are typed so the two kinds of entry can never collide.

use std::{fmt, sync::Arc};

use domain::{PipelineResult, SearchResult};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::keyed_locks::{KeyGuard, KeyedLocks};
use crate::ports::{CachePort, CachePortExt, CacheStats};

/// Typed cache key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Raw search listing for a query
    RawSearch(String),
    /// Complete pipeline result for a query
    FullResult(String),
}

impl CacheKey {
    /// Key under which the entry is kept in the store
    ///
    /// Each variant owns a distinct prefix, so two different keys never map
    /// to the same storage key.
    #[must_use]
    pub fn storage_key(&self) -> String {
        match self {
            Self::RawSearch(query) => format!("search:{query}"),
            Self::FullResult(query) => format!("pipeline:{query}"),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.storage_key())
    }
}

/// Cache of search listings and pipeline results
///
/// Store failures are logged and treated as misses; they never fail a query.
#[derive(Debug)]
pub struct QueryResultCache {
    store: Arc<dyn CachePort>,
    locks: KeyedLocks<CacheKey>,
}

impl QueryResultCache {
    /// Create a cache over the given store
    #[must_use]
    pub fn new(store: Arc<dyn CachePort>) -> Self {
        Self {
            store,
            locks: KeyedLocks::new(),
        }
    }

    /// Serialize work on `key` until the returned guard is dropped
    pub async fn lock(&self, key: &CacheKey) -> KeyGuard<'_, CacheKey> {
        self.locks.acquire(key).await
    }

    /// Cached search listing for `query`
    pub async fn search_results(&self, query: &str) -> Option<Vec<SearchResult>> {
        self.get(&CacheKey::RawSearch(query.to_string())).await
    }

    /// Store the search listing for `query`
    pub async fn store_search_results(&self, query: &str, results: &[SearchResult]) {
        self.put(&CacheKey::RawSearch(query.to_string()), &results)
            .await;
    }

    /// Cached pipeline result for `query`
    pub async fn pipeline_result(&self, query: &str) -> Option<PipelineResult> {
        self.get(&CacheKey::FullResult(query.to_string())).await
    }

    /// Store a pipeline result under its query
    pub async fn store_pipeline_result(&self, result: &PipelineResult) {
        self.put(&CacheKey::FullResult(result.query.clone()), result)
            .await;
    }

    /// Statistics of the underlying store
    pub fn stats(&self) -> CacheStats {
        self.store.stats()
    }

    async fn get<T>(&self, key: &CacheKey) -> Option<T>
    where
        T: DeserializeOwned + Send,
    {
        match self.store.get::<T>(&key.storage_key()).await {
            Ok(Some(value)) => {
                debug!(key = %key, "Query cache hit");
                Some(value)
            },
            Ok(None) => None,
            Err(e) => {
                warn!(key = %key, error = %e, "Query cache read failed, treating as miss");
                None
            },
        }
    }

    async fn put<T>(&self, key: &CacheKey, value: &T)
    where
        T: Serialize + Send + Sync + ?Sized,
    {
        if let Err(e) = self.store.set(&key.storage_key(), &value).await {
            warn!(key = %key, error = %e, "Query cache write failed");
        }
    }
}
