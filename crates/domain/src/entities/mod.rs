//! Domain entities

mod summary;
mod web_search;

pub use summary::{PipelineResult, SourceSummary};
pub use web_search::{SearchResult, distinct_by_host, hostname_of};
