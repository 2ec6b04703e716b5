//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `cache`: Query cache bounds
//!
//! The integration crates own their own sections (`websearch`, `page_fetch`,
//! `summarizer`) and the pipeline tunables live with the application layer.

mod cache;
mod server;

use ai_core::SummarizerConfig;
use application::PipelineSettings;
use integration_websearch::{PageFetchConfig, WebSearchConfig};
use serde::{Deserialize, Serialize};

pub use cache::CacheConfig;
pub use server::ServerConfig;

use crate::telemetry::TelemetryConfig;

/// Prefix of environment variables overriding the configuration
pub const ENV_PREFIX: &str = "SIFT";

/// Separator between prefix and nested keys (e.g., `SIFT__SERVER__PORT`)
pub const ENV_SEPARATOR: &str = "__";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Search provider configuration
    #[serde(default)]
    pub websearch: WebSearchConfig,

    /// Candidate page fetch configuration
    #[serde(default)]
    pub page_fetch: PageFetchConfig,

    /// Summarization engine configuration
    #[serde(default)]
    pub summarizer: SummarizerConfig,

    /// Pipeline tunables
    #[serde(default)]
    pub pipeline: PipelineSettings,

    /// Query cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `config.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config", None)
    }

    /// Load configuration from the named file (extension optional) and either
    /// the process environment or the given variables
    pub fn load_from(
        file: &str,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("summarizer.base_url", "http://localhost:11434")?
            // Load from file if exists
            .add_source(config::File::with_name(file).required(false))
            // Override with environment variables (e.g., SIFT__SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true)
                    .source(env),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate every section, naming the section that failed
    pub fn validate(&self) -> Result<(), String> {
        self.server
            .validate()
            .map_err(|e| format!("server: {e}"))?;
        self.websearch
            .validate()
            .map_err(|e| format!("websearch: {e}"))?;
        self.page_fetch
            .validate()
            .map_err(|e| format!("page_fetch: {e}"))?;
        self.summarizer
            .validate()
            .map_err(|e| format!("summarizer: {e}"))?;
        self.pipeline
            .validate()
            .map_err(|e| format!("pipeline: {e}"))?;
        self.cache.validate().map_err(|e| format!("cache: {e}"))?;
        Ok(())
    }
}
