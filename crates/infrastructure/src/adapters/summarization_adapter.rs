//! Summarization adapter - Implements SummarizationEnginePort using ai_core
//!
//! Works with any engine behind the `ai_core::SummarizationEngine` trait; the
//! server wires in the Ollama client.

use std::sync::Arc;

use ai_core::{InferenceError, OllamaSummarizer, SummarizationEngine, SummarizerConfig, SummaryRequest};
use application::{
    error::ApplicationError,
    ports::{SummarizationEnginePort, SummaryLength},
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter exposing a summarization engine as the application's engine port
#[derive(Clone)]
pub struct SummarizationAdapter {
    engine: Arc<dyn SummarizationEngine>,
}

impl std::fmt::Debug for SummarizationAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummarizationAdapter")
            .field("model", &self.engine.model())
            .finish()
    }
}

impl SummarizationAdapter {
    /// Create an adapter over an Ollama server
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: SummarizerConfig) -> Result<Self, ApplicationError> {
        let engine = OllamaSummarizer::new(config).map_err(map_error)?;
        Ok(Self::with_engine(Arc::new(engine)))
    }

    /// Create an adapter over any summarization engine
    #[must_use]
    pub fn with_engine(engine: Arc<dyn SummarizationEngine>) -> Self {
        Self { engine }
    }

    /// The wrapped engine, shared with the warm-up task
    #[must_use]
    pub fn engine(&self) -> Arc<dyn SummarizationEngine> {
        Arc::clone(&self.engine)
    }
}

/// Convert ai_core error to application error
fn map_error(e: InferenceError) -> ApplicationError {
    match e {
        InferenceError::ConnectionFailed(msg) => {
            ApplicationError::ExternalService(format!("Ollama connection failed: {msg}"))
        },
        InferenceError::Timeout(ms) => {
            ApplicationError::Timeout(format!("Summarization timeout after {ms}ms"))
        },
        other => ApplicationError::Inference(other.to_string()),
    }
}

#[async_trait]
impl SummarizationEnginePort for SummarizationAdapter {
    #[instrument(skip(self, text), fields(text_len = text.len(), min = length.min, max = length.max))]
    async fn summarize(&self, text: &str, length: SummaryLength) -> Result<String, ApplicationError> {
        let request = SummaryRequest::new(text, length.min, length.max);
        let response = self.engine.summarize(request).await.map_err(map_error)?;

        debug!(
            model = %response.model,
            tokens = ?response.eval_count,
            "Engine summary received"
        );

        Ok(response.summary)
    }

    fn engine_name(&self) -> &str {
        self.engine.model()
    }
}

#[cfg(test)]
mod tests {
    use ai_core::SummaryResponse;
    use parking_lot::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingEngine {
        requests: Mutex<Vec<SummaryRequest>>,
        fail_with_timeout: bool,
    }

    #[async_trait]
    impl SummarizationEngine for RecordingEngine {
        async fn summarize(&self, request: SummaryRequest) -> Result<SummaryResponse, InferenceError> {
            self.requests.lock().push(request);
            if self.fail_with_timeout {
                return Err(InferenceError::Timeout(30000));
            }
            Ok(SummaryResponse {
                summary: "Rust is safe.".to_string(),
                model: "recording".to_string(),
                eval_count: Some(4),
            })
        }

        async fn warm_up(&self) -> Result<(), InferenceError> {
            Ok(())
        }

        async fn health_check(&self) -> Result<bool, InferenceError> {
            Ok(true)
        }

        fn model(&self) -> &str {
            "recording"
        }
    }

    #[tokio::test]
    async fn forwards_text_and_length_window() {
        let engine = Arc::new(RecordingEngine::default());
        let adapter = SummarizationAdapter::with_engine(engine.clone());

        let summary = adapter
            .summarize("Rust is a language.", SummaryLength::new(60, 150))
            .await
            .unwrap();

        assert_eq!(summary, "Rust is safe.");
        let requests = engine.requests.lock();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0], SummaryRequest::new("Rust is a language.", 60, 150));
    }

    #[tokio::test]
    async fn timeout_is_mapped() {
        let engine = Arc::new(RecordingEngine {
            fail_with_timeout: true,
            ..Default::default()
        });
        let adapter = SummarizationAdapter::with_engine(engine);

        let err = adapter
            .summarize("text", SummaryLength::new(1, 2))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Timeout(msg) if msg.contains("30000ms")));
    }

    #[test]
    fn map_error_connection_failed() {
        let mapped = map_error(InferenceError::ConnectionFailed("refused".to_string()));
        let ApplicationError::ExternalService(msg) = mapped else {
            panic!("expected external service error");
        };
        assert!(msg.contains("refused"));
    }

    #[test]
    fn map_error_empty_summary_is_inference() {
        let mapped = map_error(InferenceError::EmptySummary);
        assert!(matches!(mapped, ApplicationError::Inference(_)));
    }

    #[test]
    fn engine_name_is_model() {
        let adapter = SummarizationAdapter::new(SummarizerConfig::default()).unwrap();
        assert_eq!(adapter.engine_name(), "qwen2.5:1.5b");
        assert!(format!("{adapter:?}").contains("qwen2.5:1.5b"));
    }
}
