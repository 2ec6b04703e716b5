//! Relevance extraction
//!
//! Selects the text blocks of a page that mention the query and condenses
//! them into a single bounded passage.

use std::{collections::HashSet, sync::Arc};

use regex::Regex;
use tracing::{debug, instrument, warn};

use super::repetition_filter::RepetitionFilter;
use crate::{ports::PageContentPort, settings::PipelineSettings};

/// Whole-word, case-insensitive matcher for a query phrase
///
/// Query words are matched literally, separated by any whitespace, and only
/// where the phrase is not embedded in a longer word.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    pattern: Regex,
}

impl KeywordMatcher {
    /// Build a matcher for `query`
    ///
    /// Returns `None` for a query without words, which matches nothing.
    #[must_use]
    pub fn new(query: &str) -> Option<Self> {
        let words: Vec<String> = query.split_whitespace().map(regex::escape).collect();
        if words.is_empty() {
            return None;
        }

        let pattern = format!(r"(?i)(?:^|\W){}(?:\W|$)", words.join(r"\s+"));
        Regex::new(&pattern).ok().map(|pattern| Self { pattern })
    }

    /// Check whether `text` contains the query phrase
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Extracts query-relevant content from web pages
pub struct RelevanceExtractor {
    pages: Arc<dyn PageContentPort>,
    filter: RepetitionFilter,
    min_block_chars: usize,
    max_content_chars: usize,
}

impl std::fmt::Debug for RelevanceExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelevanceExtractor")
            .field("filter", &self.filter)
            .field("min_block_chars", &self.min_block_chars)
            .field("max_content_chars", &self.max_content_chars)
            .finish_non_exhaustive()
    }
}

impl RelevanceExtractor {
    /// Create an extractor using the limits in `settings`
    #[must_use]
    pub fn new(pages: Arc<dyn PageContentPort>, settings: &PipelineSettings) -> Self {
        Self {
            pages,
            filter: RepetitionFilter::new(settings.max_word_repeats),
            min_block_chars: settings.min_block_chars,
            max_content_chars: settings.max_content_chars,
        }
    }

    /// Fetch `url` and return its content that mentions the query
    ///
    /// Returns `None` when the page cannot be fetched or has no block that
    /// mentions the query. Neither case is an error for the caller.
    #[instrument(skip(self, matcher))]
    pub async fn extract(&self, url: &str, matcher: &KeywordMatcher) -> Option<String> {
        let blocks = match self.pages.fetch_text_blocks(url).await {
            Ok(blocks) => blocks,
            Err(e) => {
                let outcome = if e.is_network_failure() {
                    "page_unreachable"
                } else {
                    "fetch_failed"
                };
                warn!(error = %e, outcome, "Could not fetch page");
                return None;
            },
        };

        let content = self.select_relevant(&blocks, matcher);
        if content.is_none() {
            debug!(
                blocks = blocks.len(),
                outcome = "no_relevant_content",
                "No block mentions the query"
            );
        }
        content
    }

    /// Join the qualifying blocks into one passage
    ///
    /// A block qualifies if, trimmed, it is longer than the minimum length,
    /// mentions the query, and has not been seen before on the page. The
    /// joined text is cut to the maximum length, then repetition-filtered.
    #[must_use]
    pub fn select_relevant(&self, blocks: &[String], matcher: &KeywordMatcher) -> Option<String> {
        let mut seen = HashSet::new();
        let kept: Vec<&str> = blocks
            .iter()
            .map(|block| block.trim())
            .filter(|block| block.chars().count() > self.min_block_chars)
            .filter(|block| matcher.is_match(block))
            .filter(|block| seen.insert(*block))
            .collect();

        if kept.is_empty() {
            return None;
        }

        let joined = kept.join(" ");
        let truncated: String = joined.chars().take(self.max_content_chars).collect();
        Some(self.filter.filter(&truncated))
    }
}
