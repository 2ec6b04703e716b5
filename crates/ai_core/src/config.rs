//! Configuration for the summarization engine

use serde::{Deserialize, Serialize};

/// Configuration for the Ollama summarization engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Use the engine at all; when false every summary is the fallback
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Base URL of the Ollama server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model used for summaries
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Temperature for sampling (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Seconds between warm-up attempts while the model is not loaded
    #[serde(default = "default_warmup_retry_secs")]
    pub warmup_retry_secs: u64,
}

const fn default_enabled() -> bool {
    true
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "qwen2.5:1.5b".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

const fn default_temperature() -> f32 {
    0.2
}

const fn default_warmup_retry_secs() -> u64 {
    10
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            base_url: default_base_url(),
            model: default_model(),
            timeout_ms: default_timeout_ms(),
            temperature: default_temperature(),
            warmup_retry_secs: default_warmup_retry_secs(),
        }
    }
}

impl SummarizerConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }

        if self.timeout_ms == 0 {
            return Err("timeout_ms must be greater than 0".to_string());
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            ));
        }

        if self.warmup_retry_secs == 0 {
            return Err("warmup_retry_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = SummarizerConfig::default();
        assert!(config.enabled);
        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.model, "qwen2.5:1.5b");
        assert_eq!(config.timeout_ms, 30000);
        assert!((config.temperature - 0.2).abs() < 0.01);
        assert_eq!(config.warmup_retry_secs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_deserialization() {
        let json = r#"{"base_url":"http://custom:8080","model":"my-model","enabled":false}"#;
        let config: SummarizerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.base_url, "http://custom:8080");
        assert_eq!(config.model, "my-model");
        assert!(!config.enabled);
    }

    #[test]
    fn config_deserialization_with_defaults() {
        let config: SummarizerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.timeout_ms, 30000);
    }

    #[test]
    fn validation_rejects_bad_temperature() {
        let config = SummarizerConfig {
            temperature: 3.5,
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("temperature"));
    }

    #[test]
    fn validation_rejects_empty_model() {
        let config = SummarizerConfig {
            model: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
