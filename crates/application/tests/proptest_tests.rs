//! Property-based tests for text processing services
//!
//! These tests use proptest to verify invariants across many random inputs.

use std::collections::HashMap;

use application::{
    KeywordMatcher, PipelineSettings, RepetitionFilter, SummarizationService, SummarizerHandle,
};
use proptest::prelude::*;

// ============================================================================
// RepetitionFilter Property Tests
// ============================================================================

mod repetition_filter_tests {
    use super::*;

    fn counts(text: &str) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for word in text.split_whitespace() {
            *counts.entry(word.to_lowercase()).or_default() += 1;
        }
        counts
    }

    proptest! {
        #[test]
        fn no_word_exceeds_cap(
            words in proptest::collection::vec("[a-cA-C]{1,2}", 0..60),
            max in 1usize..6
        ) {
            let filter = RepetitionFilter::new(max);
            let output = filter.filter(&words.join(" "));

            for (word, count) in counts(&output) {
                prop_assert!(count <= max, "{word} appears {count} times");
            }
        }

        #[test]
        fn filtering_is_idempotent(
            words in proptest::collection::vec("[a-c]{1,2}", 0..60),
            max in 1usize..6
        ) {
            let filter = RepetitionFilter::new(max);
            let once = filter.filter(&words.join(" "));
            prop_assert_eq!(filter.filter(&once), once);
        }

        #[test]
        fn output_is_ordered_subsequence(
            words in proptest::collection::vec("[a-c]{1,2}", 0..60),
            max in 1usize..6
        ) {
            let filter = RepetitionFilter::new(max);
            let output = filter.filter(&words.join(" "));

            let mut input = words.iter();
            for kept in output.split_whitespace() {
                prop_assert!(input.any(|w| w == kept));
            }
        }

        #[test]
        fn text_under_cap_is_only_normalized(
            words in proptest::collection::hash_set("[a-z]{1,8}", 0..20)
        ) {
            let text = words.into_iter().collect::<Vec<_>>().join("  \n ");
            let output = RepetitionFilter::new(1).filter(&text);
            prop_assert_eq!(output, text.split_whitespace().collect::<Vec<_>>().join(" "));
        }
    }
}

// ============================================================================
// KeywordMatcher Property Tests
// ============================================================================

mod keyword_matcher_tests {
    use super::*;

    proptest! {
        #[test]
        fn phrase_matches_itself_in_context(
            phrase in proptest::collection::vec("[a-zA-Z0-9+*?()\\[\\].]{1,6}", 1..4),
            before in "[ ,;:!]{1,3}",
            after in "[ ,;:!]{1,3}"
        ) {
            let query = phrase.join(" ");
            let matcher = KeywordMatcher::new(&query).unwrap();
            let text = format!("intro{before}{query}{after}outro");
            prop_assert!(matcher.is_match(&text));
        }

        #[test]
        fn matching_ignores_case(word in "[a-z]{2,10}") {
            let matcher = KeywordMatcher::new(&word).unwrap();
            let shouted = word.to_uppercase();
            let text = format!("say {shouted} now");
            prop_assert!(matcher.is_match(&text));
        }

        #[test]
        fn whitespace_only_query_has_no_matcher(query in "[ \\t\\n]{0,10}") {
            prop_assert!(KeywordMatcher::new(&query).is_none());
        }
    }
}

// ============================================================================
// Fallback Summary Property Tests
// ============================================================================

mod fallback_summary_tests {
    use super::*;

    proptest! {
        #[test]
        fn keeps_at_most_configured_sentences(
            sentences in proptest::collection::vec("[a-z]{1,8}( [a-z]{1,8}){0,4}", 0..10),
            n in 1usize..5
        ) {
            let settings = PipelineSettings {
                fallback_sentences: n,
                ..Default::default()
            };
            let service = SummarizationService::new(SummarizerHandle::not_ready(), &settings);

            let text = sentences.iter().map(|s| format!("{s}.")).collect::<Vec<_>>().join(" ");
            let summary = service.fallback_summary(&text);

            let expected = sentences.iter().take(n).cloned().collect::<Vec<_>>().join(". ");
            prop_assert_eq!(summary, expected);
        }
    }
}
