#![forbid(unsafe_code)]
//! Web search and page content integration for Sift
//!
//! Provides the two network-facing pieces of the pipeline:
//!
//! - [`DuckDuckGoHtmlClient`] scrapes ranked result links from the DuckDuckGo
//!   HTML endpoint, resolving its redirect wrappers.
//! - [`PageFetcher`] probes and fetches a candidate page and splits it into
//!   content blocks with presentation elements removed.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_websearch::{DuckDuckGoHtmlClient, SearchProvider, WebSearchConfig};
//!
//! let client = DuckDuckGoHtmlClient::new(&WebSearchConfig::default())?;
//! for result in client.search("Rust programming language", 10).await? {
//!     println!("[{}] {} - {}", result.source, result.title, result.url);
//! }
//! ```

mod config;
mod duckduckgo;
mod error;
mod extract;
mod page;
mod provider;
mod redirect;

pub use config::{PageFetchConfig, WebSearchConfig};
pub use duckduckgo::DuckDuckGoHtmlClient;
pub use error::WebSearchError;
pub use extract::text_blocks;
pub use page::PageFetcher;
pub use provider::SearchProvider;
pub use redirect::resolve_redirect_url;
