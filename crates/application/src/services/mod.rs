//! Application services
//!
//! The pipeline is composed bottom-up:
//! - `RepetitionFilter`: caps how often any word may appear in a text
//! - `SearchService`: cached, failure-absorbing search provider access
//! - `RelevanceExtractor`: picks the query-relevant text of one page
//! - `SummarizationService`: engine summary with a deterministic fallback
//! - `QueryResultCache`: typed-key memoization with per-key locking
//! - `SummaryPipeline`: drives one query end to end

mod keyed_locks;
mod pipeline_service;
mod query_cache;
mod relevance_extractor;
mod repetition_filter;
mod search_service;
mod summarization_service;
#[cfg(test)]
pub(crate) mod test_support;

pub use keyed_locks::{KeyGuard, KeyedLocks};
pub use pipeline_service::SummaryPipeline;
pub use query_cache::{CacheKey, QueryResultCache};
pub use relevance_extractor::{KeywordMatcher, RelevanceExtractor};
pub use repetition_filter::RepetitionFilter;
pub use search_service::SearchService;
pub use summarization_service::{SummarizationService, SummarizerHandle, SummaryOutcome};
