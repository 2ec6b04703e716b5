//! In-memory fakes for service tests

use std::{
    collections::HashMap,
    sync::atomic::{AtomicU64, AtomicUsize, Ordering},
};

use async_trait::async_trait;
use domain::SearchResult;
use parking_lot::Mutex;

use crate::{
    error::ApplicationError,
    ports::{
        CachePort, CacheStats, PageContentPort, SummarizationEnginePort, SummaryLength,
        WebSearchPort,
    },
};

/// Unbounded map-backed cache, optionally failing every call
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Vec<u8>>>,
    hits: AtomicU64,
    misses: AtomicU64,
    failing: bool,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl CachePort for MemoryCache {
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, ApplicationError> {
        if self.failing {
            return Err(ApplicationError::Internal("cache offline".to_string()));
        }
        let value = self.entries.lock().get(key).cloned();
        if value.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        Ok(value)
    }

    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), ApplicationError> {
        if self.failing {
            return Err(ApplicationError::Internal("cache offline".to_string()));
        }
        self.entries.lock().insert(key.to_string(), value);
        Ok(())
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.lock().len() as u64,
        }
    }
}

/// Search provider returning a fixed listing
#[derive(Debug, Default)]
pub struct FakeSearch {
    listing: Vec<SearchResult>,
    failing: bool,
    calls: AtomicUsize,
}

impl FakeSearch {
    pub fn new(listing: Vec<SearchResult>) -> Self {
        Self {
            listing,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WebSearchPort for FakeSearch {
    async fn search(
        &self,
        _query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, ApplicationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;

        if self.failing {
            return Err(ApplicationError::ExternalService(
                "connection refused".to_string(),
            ));
        }
        Ok(self.listing.iter().take(max_results).cloned().collect())
    }

    fn provider_name(&self) -> &str {
        "fake"
    }
}

/// Page source backed by a URL map; unknown URLs fail like a dead host
#[derive(Debug, Default)]
pub struct FakePages {
    pages: HashMap<String, Result<Vec<String>, String>>,
    visited: Mutex<Vec<String>>,
}

impl FakePages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, blocks: Vec<String>) -> Self {
        self.pages.insert(url.to_string(), Ok(blocks));
        self
    }

    pub fn with_failure(mut self, url: &str) -> Self {
        self.pages
            .insert(url.to_string(), Err("probe timed out".to_string()));
        self
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().clone()
    }
}

#[async_trait]
impl PageContentPort for FakePages {
    async fn fetch_text_blocks(&self, url: &str) -> Result<Vec<String>, ApplicationError> {
        self.visited.lock().push(url.to_string());
        tokio::task::yield_now().await;

        match self.pages.get(url) {
            Some(Ok(blocks)) => Ok(blocks.clone()),
            Some(Err(reason)) => Err(ApplicationError::Timeout(reason.clone())),
            None => Err(ApplicationError::ExternalService(format!("no route to {url}"))),
        }
    }
}

/// Summarization engine answering with a fixed text
#[derive(Debug)]
pub struct FakeEngine {
    response: String,
    calls: AtomicUsize,
}

impl FakeEngine {
    pub fn returning(response: &str) -> Self {
        Self {
            response: response.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SummarizationEnginePort for FakeEngine {
    async fn summarize(
        &self,
        _text: &str,
        _length: SummaryLength,
    ) -> Result<String, ApplicationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }

    fn engine_name(&self) -> &str {
        "fake"
    }
}
