//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer over the search, page
//! fetch and summarization clients, and provides the cache, configuration,
//! logging and template services the server is assembled from.

pub mod adapters;
pub mod cache;
pub mod config;
pub mod telemetry;
pub mod templates;

pub use adapters::*;
pub use cache::{MokaCache, MokaCacheConfig};
pub use config::{AppConfig, CacheConfig, ServerConfig};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
pub use templates::{TemplateEngine, TemplateError};
