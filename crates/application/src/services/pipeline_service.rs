//! Summary pipeline
//!
//! Drives one query end to end: search, per-source relevance extraction and
//! summarization, and a final summary across sources. Sources are processed
//! one at a time in ranked order, so the selection is reproducible for a
//! given search listing.

use std::{collections::HashSet, sync::Arc};

use domain::{PipelineResult, SourceSummary};
use tracing::{debug, info, instrument};

use super::{
    query_cache::{CacheKey, QueryResultCache},
    relevance_extractor::{KeywordMatcher, RelevanceExtractor},
    search_service::SearchService,
    summarization_service::{SummarizationService, SummarizerHandle},
};
use crate::{
    ports::{CachePort, CacheStats, PageContentPort, WebSearchPort},
    settings::PipelineSettings,
};

/// Search-extract-summarize pipeline
#[derive(Debug)]
pub struct SummaryPipeline {
    search: SearchService,
    extractor: RelevanceExtractor,
    summarizer: SummarizationService,
    cache: Arc<QueryResultCache>,
    settings: PipelineSettings,
}

impl SummaryPipeline {
    /// Assemble a pipeline from its collaborators
    #[must_use]
    pub fn new(
        search: Arc<dyn WebSearchPort>,
        pages: Arc<dyn PageContentPort>,
        summarizer: SummarizerHandle,
        store: Arc<dyn CachePort>,
        settings: PipelineSettings,
    ) -> Self {
        let cache = Arc::new(QueryResultCache::new(store));

        Self {
            search: SearchService::new(search, Arc::clone(&cache), settings.max_search_results),
            extractor: RelevanceExtractor::new(pages, &settings),
            summarizer: SummarizationService::new(summarizer, &settings),
            cache,
            settings,
        }
    }

    /// Produce the summarized answer for `query`
    ///
    /// A query without words yields the no-results answer without searching.
    /// Identical queries are answered from the cache; concurrent identical
    /// queries wait for the first run to finish.
    #[instrument(skip(self), fields(query_len = query.len()))]
    pub async fn run(&self, query: &str) -> PipelineResult {
        let Some(matcher) = KeywordMatcher::new(query) else {
            debug!("Query has no words");
            return PipelineResult::no_results(query, &self.settings.no_results_message);
        };

        let key = CacheKey::FullResult(query.to_string());
        let _guard = self.cache.lock(&key).await;

        if let Some(cached) = self.cache.pipeline_result(query).await {
            debug!("Returning cached pipeline result");
            return cached;
        }

        let Some(results) = self.search.try_search(query).await else {
            return PipelineResult::no_results(query, &self.settings.no_results_message);
        };

        let mut seen_hosts = HashSet::new();
        let mut sources = Vec::new();

        for result in results {
            if sources.len() >= self.settings.max_sources {
                break;
            }
            if seen_hosts.contains(result.host()) {
                continue;
            }

            let Some(content) = self.extractor.extract(&result.url, &matcher).await else {
                continue;
            };

            let outcome = self.summarizer.summarize(&content).await;
            seen_hosts.insert(result.source.clone());
            sources.push(SourceSummary::new(
                result.title,
                result.url,
                outcome.text,
                outcome.used_fallback,
            ));
        }

        let result = if sources.is_empty() {
            PipelineResult::no_results(query, &self.settings.no_results_message)
        } else {
            let combined = sources
                .iter()
                .map(|s| s.summary.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            let outcome = self.summarizer.summarize(&combined).await;
            PipelineResult::new(query, sources, outcome.text, outcome.used_fallback)
        };

        info!(
            sources = result.summary.len(),
            used_fallback = result.used_fallback,
            "Pipeline completed"
        );

        self.cache.store_pipeline_result(&result).await;
        result
    }

    /// Whether summaries currently come from the engine
    #[must_use]
    pub fn summarizer_ready(&self) -> bool {
        self.summarizer.handle().is_ready()
    }

    /// Statistics of the query cache
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Settings in effect
    #[must_use]
    pub const fn settings(&self) -> &PipelineSettings {
        &self.settings
    }
}
