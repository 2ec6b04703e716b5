//! Word repetition filter

use std::collections::HashMap;

/// Drops word occurrences beyond a fixed per-word limit
///
/// Words are whitespace-separated tokens counted case-insensitively. A token
/// is kept while its running count (including itself) is within the limit;
/// kept tokens retain their original casing and order and are rejoined with
/// single spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepetitionFilter {
    max_occurrences: usize,
}

impl RepetitionFilter {
    /// Default number of times a word may appear
    pub const DEFAULT_MAX_OCCURRENCES: usize = 5;

    /// Create a filter keeping each word at most `max_occurrences` times
    #[must_use]
    pub const fn new(max_occurrences: usize) -> Self {
        Self { max_occurrences }
    }

    /// Maximum number of times a word is kept
    #[must_use]
    pub const fn max_occurrences(&self) -> usize {
        self.max_occurrences
    }

    /// Filter repeated words out of `text`
    #[must_use]
    pub fn filter(&self, text: &str) -> String {
        let mut counts: HashMap<String, usize> = HashMap::new();

        text.split_whitespace()
            .filter(|word| {
                let count = counts.entry(word.to_lowercase()).or_insert(0);
                *count += 1;
                *count <= self.max_occurrences
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for RepetitionFilter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_OCCURRENCES)
    }
}
