//! Pipeline limits and literals

use serde::{Deserialize, Serialize};

/// Tunable limits of the search-extract-summarize pipeline
///
/// Defaults reproduce the reference behavior: 10 search results, 5 sources,
/// blocks longer than 50 characters, 3000 characters of content, words kept
/// at most 5 times, and a 3-sentence fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSettings {
    /// Maximum number of sources summarized per query
    #[serde(default = "default_max_sources")]
    pub max_sources: usize,

    /// Maximum number of search results considered per query
    #[serde(default = "default_max_search_results")]
    pub max_search_results: usize,

    /// A text block must be strictly longer than this to be considered
    #[serde(default = "default_min_block_chars")]
    pub min_block_chars: usize,

    /// Extracted content is truncated to this many characters
    #[serde(default = "default_max_content_chars")]
    pub max_content_chars: usize,

    /// A word is dropped once it has appeared more than this many times
    #[serde(default = "default_max_word_repeats")]
    pub max_word_repeats: usize,

    /// Number of sentences kept by the fallback summary
    #[serde(default = "default_fallback_sentences")]
    pub fallback_sentences: usize,

    /// Lower bound passed to the summarization engine (engine units)
    #[serde(default = "default_summary_min_length")]
    pub summary_min_length: u32,

    /// Upper bound passed to the summarization engine (engine units)
    #[serde(default = "default_summary_max_length")]
    pub summary_max_length: u32,

    /// Final summary used when no source qualified
    #[serde(default = "default_no_results_message")]
    pub no_results_message: String,
}

const fn default_max_sources() -> usize {
    5
}

const fn default_max_search_results() -> usize {
    10
}

const fn default_min_block_chars() -> usize {
    50
}

const fn default_max_content_chars() -> usize {
    3000
}

const fn default_max_word_repeats() -> usize {
    5
}

const fn default_fallback_sentences() -> usize {
    3
}

const fn default_summary_min_length() -> u32 {
    60
}

const fn default_summary_max_length() -> u32 {
    150
}

fn default_no_results_message() -> String {
    "No relevant information found.".to_string()
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            max_sources: default_max_sources(),
            max_search_results: default_max_search_results(),
            min_block_chars: default_min_block_chars(),
            max_content_chars: default_max_content_chars(),
            max_word_repeats: default_max_word_repeats(),
            fallback_sentences: default_fallback_sentences(),
            summary_min_length: default_summary_min_length(),
            summary_max_length: default_summary_max_length(),
            no_results_message: default_no_results_message(),
        }
    }
}

impl PipelineSettings {
    /// Validate the settings
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_sources == 0 {
            return Err("max_sources must be greater than 0".to_string());
        }

        if self.max_search_results == 0 {
            return Err("max_search_results must be greater than 0".to_string());
        }

        if self.max_content_chars == 0 {
            return Err("max_content_chars must be greater than 0".to_string());
        }

        if self.max_word_repeats == 0 {
            return Err("max_word_repeats must be greater than 0".to_string());
        }

        if self.fallback_sentences == 0 {
            return Err("fallback_sentences must be greater than 0".to_string());
        }

        if self.summary_min_length > self.summary_max_length {
            return Err(format!(
                "summary_min_length ({}) must not exceed summary_max_length ({})",
                self.summary_min_length, self.summary_max_length
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = PipelineSettings::default();
        assert_eq!(settings.max_sources, 5);
        assert_eq!(settings.max_search_results, 10);
        assert_eq!(settings.min_block_chars, 50);
        assert_eq!(settings.max_content_chars, 3000);
        assert_eq!(settings.max_word_repeats, 5);
        assert_eq!(settings.fallback_sentences, 3);
        assert_eq!(settings.summary_min_length, 60);
        assert_eq!(settings.summary_max_length, 150);
        assert_eq!(settings.no_results_message, "No relevant information found.");
    }

    #[test]
    fn validation_success() {
        assert!(PipelineSettings::default().validate().is_ok());
    }

    #[test]
    fn validation_rejects_zero_sources() {
        let settings = PipelineSettings {
            max_sources: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn validation_rejects_inverted_lengths() {
        let settings = PipelineSettings {
            summary_min_length: 200,
            summary_max_length: 100,
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.contains("summary_min_length"));
    }

    #[test]
    fn deserializes_partial_settings() {
        let settings: PipelineSettings = serde_json::from_str(r#"{"max_sources":3}"#).unwrap();
        assert_eq!(settings.max_sources, 3);
        assert_eq!(settings.max_content_chars, 3000);
    }
}
