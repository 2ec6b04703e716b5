//! Application state shared across handlers

use std::sync::Arc;

use application::SummaryPipeline;
use infrastructure::TemplateEngine;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search-extract-summarize pipeline
    pub pipeline: Arc<SummaryPipeline>,
    /// Page templates
    pub templates: Arc<TemplateEngine>,
}

impl AppState {
    /// Create the state from its parts
    #[must_use]
    pub fn new(pipeline: SummaryPipeline, templates: TemplateEngine) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            templates: Arc::new(templates),
        }
    }
}
