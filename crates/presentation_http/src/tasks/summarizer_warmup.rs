//! Summarizer warm-up task
//!
//! Loads the summarization model in the background and switches the pipeline
//! from fallback summaries to engine summaries once the model answers.

use std::sync::Arc;
use std::time::Duration;

use application::SummarizerHandle;
use infrastructure::SummarizationAdapter;
use tracing::{info, warn};

/// Spawn a background task that warms up the summarization engine.
///
/// Each attempt first checks that the engine's server answers, then asks it
/// to load its model, sleeping `retry_interval` after a failed attempt. On success the adapter is installed in
/// `handle`; until then the pipeline keeps serving fallback summaries.
///
/// Returns a `JoinHandle` that can be used to abort the task when shutting down.
pub fn spawn_summarizer_warmup(
    handle: SummarizerHandle,
    adapter: SummarizationAdapter,
    retry_interval: Duration,
) -> tokio::task::JoinHandle<()> {
    let engine = adapter.engine();

    info!(
        model = %engine.model(),
        retry_secs = retry_interval.as_secs(),
        "Starting summarizer warm-up task"
    );

    tokio::spawn(async move {
        let mut attempt: u32 = 0;

        loop {
            attempt = attempt.saturating_add(1);

            match engine.health_check().await {
                Ok(true) => {},
                Ok(false) | Err(_) => {
                    warn!(attempt = attempt, "Summarizer server unreachable, retrying later");
                    tokio::time::sleep(retry_interval).await;
                    continue;
                },
            }

            match engine.warm_up().await {
                Ok(()) => {
                    handle.mark_ready(Arc::new(adapter));
                    info!(attempt = attempt, "Summarizer ready, engine summaries enabled");
                    break;
                },
                Err(e) => {
                    warn!(
                        attempt = attempt,
                        error = %e,
                        "Summarizer warm-up failed, serving fallback summaries"
                    );
                    tokio::time::sleep(retry_interval).await;
                },
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use ai_core::{InferenceError, SummarizationEngine, SummaryRequest, SummaryResponse};
    use application::SummarizationEnginePort;
    use async_trait::async_trait;

    use super::*;

    /// Engine that fails `failures` warm-ups before succeeding
    struct FlakyEngine {
        failures: usize,
        reachable: bool,
        attempts: AtomicUsize,
    }

    impl FlakyEngine {
        fn new(failures: usize) -> Self {
            Self {
                failures,
                reachable: true,
                attempts: AtomicUsize::new(0),
            }
        }

        fn unreachable() -> Self {
            Self {
                reachable: false,
                ..Self::new(0)
            }
        }
    }

    #[async_trait]
    impl SummarizationEngine for FlakyEngine {
        async fn summarize(&self, _request: SummaryRequest) -> Result<SummaryResponse, InferenceError> {
            Ok(SummaryResponse {
                summary: "summary".to_string(),
                model: "flaky".to_string(),
                eval_count: None,
            })
        }

        async fn warm_up(&self) -> Result<(), InferenceError> {
            let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
            if attempt < self.failures {
                Err(InferenceError::ConnectionFailed("not up yet".to_string()))
            } else {
                Ok(())
            }
        }

        async fn health_check(&self) -> Result<bool, InferenceError> {
            Ok(self.reachable)
        }

        fn model(&self) -> &str {
            "flaky"
        }
    }

    #[tokio::test]
    async fn marks_ready_after_retries() {
        let engine = Arc::new(FlakyEngine::new(2));
        let handle = SummarizerHandle::not_ready();
        let adapter = SummarizationAdapter::with_engine(engine.clone());

        let task = spawn_summarizer_warmup(handle.clone(), adapter, Duration::from_millis(10));
        tokio::time::timeout(Duration::from_secs(5), task)
            .await
            .unwrap()
            .unwrap();

        assert!(handle.is_ready());
        assert_eq!(engine.attempts.load(Ordering::SeqCst), 3);
        assert_eq!(handle.engine().unwrap().engine_name(), "flaky");
    }

    #[tokio::test]
    async fn stays_not_ready_while_engine_is_down() {
        let engine = Arc::new(FlakyEngine::new(usize::MAX));
        let handle = SummarizerHandle::not_ready();
        let adapter = SummarizationAdapter::with_engine(engine.clone());

        let task = spawn_summarizer_warmup(handle.clone(), adapter, Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(!handle.is_ready());
        assert!(engine.attempts.load(Ordering::SeqCst) >= 2);

        task.abort();
    }

    #[tokio::test]
    async fn skips_warm_up_while_server_is_unreachable() {
        let engine = Arc::new(FlakyEngine::unreachable());
        let handle = SummarizerHandle::not_ready();
        let adapter = SummarizationAdapter::with_engine(engine.clone());

        let task = spawn_summarizer_warmup(handle.clone(), adapter, Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(!handle.is_ready());
        assert_eq!(engine.attempts.load(Ordering::SeqCst), 0);

        task.abort();
    }
}
