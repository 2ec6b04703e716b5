//! Summarization service
//!
//! Produces summaries through the abstractive engine when it is ready and
//! through a deterministic sentence fallback otherwise. Summarizing never
//! fails from the caller's point of view.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, instrument, warn};

use super::repetition_filter::RepetitionFilter;
use crate::{
    ports::{SummarizationEnginePort, SummaryLength},
    settings::PipelineSettings,
};

#[derive(Clone, Default)]
enum EngineState {
    #[default]
    NotReady,
    Ready(Arc<dyn SummarizationEnginePort>),
}

/// Shared handle to the summarization engine
///
/// Starts out not ready; a warm-up task flips it to ready once the engine
/// answers. Clones share the same state.
#[derive(Clone, Default)]
pub struct SummarizerHandle {
    state: Arc<RwLock<EngineState>>,
}

impl std::fmt::Debug for SummarizerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummarizerHandle")
            .field("ready", &self.is_ready())
            .finish()
    }
}

impl SummarizerHandle {
    /// Handle without an engine; every summary uses the fallback
    #[must_use]
    pub fn not_ready() -> Self {
        Self::default()
    }

    /// Handle with an engine that is usable immediately
    #[must_use]
    pub fn ready(engine: Arc<dyn SummarizationEnginePort>) -> Self {
        let handle = Self::default();
        handle.mark_ready(engine);
        handle
    }

    /// Make `engine` the active summarizer
    pub fn mark_ready(&self, engine: Arc<dyn SummarizationEnginePort>) {
        *self.state.write() = EngineState::Ready(engine);
    }

    /// Whether summaries currently go to the engine
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(*self.state.read(), EngineState::Ready(_))
    }

    /// Active engine, if ready
    #[must_use]
    pub fn engine(&self) -> Option<Arc<dyn SummarizationEnginePort>> {
        match &*self.state.read() {
            EngineState::Ready(engine) => Some(Arc::clone(engine)),
            EngineState::NotReady => None,
        }
    }
}

/// A summary and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOutcome {
    /// Summary text
    pub text: String,
    /// Whether the sentence fallback produced the text
    pub used_fallback: bool,
}

impl SummaryOutcome {
    fn engine(text: String) -> Self {
        Self {
            text,
            used_fallback: false,
        }
    }

    fn fallback(text: String) -> Self {
        Self {
            text,
            used_fallback: true,
        }
    }
}

/// Summarizes text with the engine or the sentence fallback
#[derive(Debug, Clone)]
pub struct SummarizationService {
    handle: SummarizerHandle,
    filter: RepetitionFilter,
    length: SummaryLength,
    fallback_sentences: usize,
}

impl SummarizationService {
    /// Create a summarization service using the limits in `settings`
    #[must_use]
    pub fn new(handle: SummarizerHandle, settings: &PipelineSettings) -> Self {
        Self {
            handle,
            filter: RepetitionFilter::new(settings.max_word_repeats),
            length: SummaryLength::new(settings.summary_min_length, settings.summary_max_length),
            fallback_sentences: settings.fallback_sentences,
        }
    }

    /// Handle to the underlying engine
    #[must_use]
    pub const fn handle(&self) -> &SummarizerHandle {
        &self.handle
    }

    /// Summarize `text`
    ///
    /// The text is repetition-filtered first. Engine errors and empty engine
    /// output fall back to the leading sentences of the filtered text.
    #[instrument(skip(self, text), fields(text_chars = text.chars().count()))]
    pub async fn summarize(&self, text: &str) -> SummaryOutcome {
        let filtered = self.filter.filter(text);

        let Some(engine) = self.handle.engine() else {
            debug!("Summarizer not ready, using fallback");
            return SummaryOutcome::fallback(self.fallback_summary(&filtered));
        };

        match engine.summarize(&filtered, self.length).await {
            Ok(summary) if !summary.trim().is_empty() => SummaryOutcome::engine(summary.trim().to_string()),
            Ok(_) => {
                warn!(engine = engine.engine_name(), "Summarizer returned no text, using fallback");
                SummaryOutcome::fallback(self.fallback_summary(&filtered))
            },
            Err(e) => {
                warn!(engine = engine.engine_name(), error = %e, "Summarizer failed, using fallback");
                SummaryOutcome::fallback(self.fallback_summary(&filtered))
            },
        }
    }

    /// First sentences of `text`, split on periods and re-joined
    ///
    /// Empty segments are skipped. `"A. B. C. D."` with three sentences
    /// yields `"A. B. C"`.
    #[must_use]
    pub fn fallback_summary(&self, text: &str) -> String {
        text.split('.')
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .take(self.fallback_sentences)
            .collect::<Vec<_>>()
            .join(". ")
    }
}
