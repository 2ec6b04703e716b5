//! Template engine module for rendering the search pages
//!
//! Uses the Tera templating engine with templates compiled into the binary.
//! HTML auto-escaping is always on, so page titles, summaries and the echoed
//! query cannot inject markup.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::TemplateEngine;
//!
//! let engine = TemplateEngine::new()?;
//! let landing = engine.render_index(None)?;
//! let page = engine.render_index(Some(&pipeline_result))?;
//! ```

use std::sync::Arc;

use domain::PipelineResult;
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;
use tracing::debug;

/// Name of the search page template
pub const INDEX_TEMPLATE: &str = "index.html";

/// Name of the legal notice template
pub const LEGAL_TEMPLATE: &str = "legal.html";

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// Template context wrapper for type-safe context building
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    inner: Context,
}

impl TemplateContext {
    /// Create a new empty template context
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Context::new(),
        }
    }

    /// Insert a value into the context
    pub fn insert<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        self.inner.insert(key, value);
    }
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const INDEX: &str = include_str!("../../templates/index.html");
    pub const LEGAL: &str = include_str!("../../templates/legal.html");
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("templates", &self.tera.get_template_names().count())
            .finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create a new template engine with the embedded templates
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);

        tera.add_raw_templates(vec![
            (INDEX_TEMPLATE, embedded::INDEX),
            (LEGAL_TEMPLATE, embedded::LEGAL),
        ])
        .map_err(|e| TemplateError::Compile(e.to_string()))?;

        debug!("Loaded embedded templates");

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render a template with the given context
    pub fn render(
        &self,
        template_name: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        self.tera
            .render(template_name, &context.inner)
            .map_err(TemplateError::from)
    }

    /// Render the search page, empty or showing a pipeline result
    pub fn render_index(&self, result: Option<&PipelineResult>) -> Result<String, TemplateError> {
        let mut ctx = TemplateContext::new();
        ctx.insert("query", &result.map(|r| r.query.as_str()));
        ctx.insert("summary", &result.map(|r| &r.summary));
        ctx.insert("finalSummary", &result.map(|r| r.final_summary.as_str()));

        self.render(INDEX_TEMPLATE, &ctx)
    }

    /// Render the static legal notice
    pub fn render_legal(&self) -> Result<String, TemplateError> {
        self.render(LEGAL_TEMPLATE, &TemplateContext::new())
    }
}

#[cfg(test)]
mod tests {
    use domain::SourceSummary;

    use super::*;

    fn result() -> PipelineResult {
        PipelineResult::new(
            "rust",
            vec![
                SourceSummary::new(
                    "Rust Programming Language",
                    "https://www.rust-lang.org/",
                    "Rust is fast and memory-efficient.",
                    false,
                ),
                SourceSummary::new(
                    "Rust - Wikipedia",
                    "https://en.wikipedia.org/wiki/Rust_(programming_language)",
                    "Rust is a general-purpose language",
                    true,
                ),
            ],
            "Rust is a fast, memory-safe language.",
            false,
        )
    }

    #[test]
    fn test_template_engine_creation() {
        assert!(TemplateEngine::new().is_ok());
    }

    #[test]
    fn test_landing_page_has_form_and_no_results() {
        let engine = TemplateEngine::new().unwrap();
        let page = engine.render_index(None).unwrap();

        assert!(page.contains(r#"<form method="post" action="/search">"#));
        assert!(page.contains(r#"name="query""#));
        assert!(!page.contains("final-summary"));
        assert!(!page.contains("Sources"));
    }

    #[test]
    fn test_result_page_lists_sources_in_order() {
        let engine = TemplateEngine::new().unwrap();
        let page = engine.render_index(Some(&result())).unwrap();

        assert!(page.contains("Rust is a fast, memory-safe language."));
        let first = page.find("Rust Programming Language").unwrap();
        let second = page.find("Rust - Wikipedia").unwrap();
        assert!(first < second);
        assert!(page.contains(r#"value="rust""#));
    }

    #[test]
    fn test_fallback_sources_are_marked() {
        let engine = TemplateEngine::new().unwrap();
        let page = engine.render_index(Some(&result())).unwrap();

        assert_eq!(page.matches("the summarizer was unavailable").count(), 1);
    }

    #[test]
    fn test_no_results_page_shows_message() {
        let engine = TemplateEngine::new().unwrap();
        let no_results = PipelineResult::no_results("zzz", "No relevant information found.");
        let page = engine.render_index(Some(&no_results)).unwrap();

        assert!(page.contains("No relevant information found."));
        assert!(!page.contains("Sources"));
    }

    #[test]
    fn test_query_is_escaped() {
        let engine = TemplateEngine::new().unwrap();
        let hostile = PipelineResult::no_results("<script>alert(1)</script>", "None.");
        let page = engine.render_index(Some(&hostile)).unwrap();

        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_legal_page_renders() {
        let engine = TemplateEngine::new().unwrap();
        let page = engine.render_legal().unwrap();
        assert!(page.contains("Legal notice"));
        assert!(!page.contains("<form"));
    }

    #[test]
    fn test_unknown_template_is_not_found() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine
            .render("missing.html", &TemplateContext::new())
            .unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(name) if name == "missing.html"));
    }
}
