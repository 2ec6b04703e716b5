//! Web search and page fetch configuration

use serde::{Deserialize, Serialize};

/// Configuration for the DuckDuckGo HTML search client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSearchConfig {
    /// Base URL of the HTML search endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Domain of the provider; results linking back to it are dropped
    #[serde(default = "default_provider_host")]
    pub provider_host: String,

    /// User-Agent header sent with search requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of results to return
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_base_url() -> String {
    "https://html.duckduckgo.com".to_string()
}

fn default_provider_host() -> String {
    "duckduckgo.com".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; Sift/0.1; +https://github.com/sift-search/sift)".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_max_results() -> usize {
    10
}

impl Default for WebSearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            provider_host: default_provider_host(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            max_results: default_max_results(),
        }
    }
}

impl WebSearchConfig {
    /// Create a configuration pointing at a local endpoint (short timeout)
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 2,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_results == 0 {
            return Err("max_results must be greater than 0".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if url::Url::parse(&self.base_url).is_err() {
            return Err(format!("base_url is not a valid URL: {}", self.base_url));
        }

        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }

        Ok(())
    }
}

/// Configuration for fetching candidate pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageFetchConfig {
    /// User-Agent header sent with probe and fetch requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Timeout of the HEAD reachability probe in seconds
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,

    /// Timeout of the GET request in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

const fn default_probe_timeout_secs() -> u64 {
    3
}

const fn default_fetch_timeout_secs() -> u64 {
    5
}

impl Default for PageFetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            probe_timeout_secs: default_probe_timeout_secs(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

impl PageFetchConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.probe_timeout_secs == 0 {
            return Err("probe_timeout_secs must be greater than 0".to_string());
        }

        if self.probe_timeout_secs >= self.fetch_timeout_secs {
            return Err(format!(
                "probe_timeout_secs ({}) must be less than fetch_timeout_secs ({})",
                self.probe_timeout_secs, self.fetch_timeout_secs
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }

        Ok(())
    }
}
