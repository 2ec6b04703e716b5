//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod page_content_adapter;
mod summarization_adapter;
mod websearch_adapter;

pub use page_content_adapter::PageContentAdapter;
pub use summarization_adapter::SummarizationAdapter;
pub use websearch_adapter::WebSearchAdapter;
