//! Query cache configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cache::MokaCacheConfig;

/// Bounds for the in-memory query result cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached entries (search listings and pipeline results)
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,

    /// Time-to-live in seconds; unset keeps entries until evicted
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: Option<u64>,
}

const fn default_max_entries() -> u64 {
    1_000
}

#[allow(clippy::unnecessary_wraps)]
const fn default_ttl_secs() -> Option<u64> {
    Some(60 * 60) // 1 hour
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl CacheConfig {
    /// Settings for the Moka cache backing the query cache
    #[must_use]
    pub fn moka_config(&self) -> MokaCacheConfig {
        MokaCacheConfig {
            max_entries: self.max_entries,
            time_to_live: self.ttl_secs.map(Duration::from_secs),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_entries == 0 {
            return Err("max_entries must be greater than 0".to_string());
        }
        if self.ttl_secs == Some(0) {
            return Err("ttl_secs must be greater than 0 when set".to_string());
        }
        Ok(())
    }
}
