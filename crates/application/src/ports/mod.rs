//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod cache_port;
mod page_content_port;
mod summarization_port;
mod websearch_port;

pub use cache_port::{CachePort, CachePortExt, CacheStats};
#[cfg(test)]
pub use page_content_port::MockPageContentPort;
pub use page_content_port::PageContentPort;
#[cfg(test)]
pub use summarization_port::MockSummarizationEnginePort;
pub use summarization_port::{SummarizationEnginePort, SummaryLength};
#[cfg(test)]
pub use websearch_port::MockWebSearchPort;
pub use websearch_port::WebSearchPort;
