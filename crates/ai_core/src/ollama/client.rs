//! Ollama summarization client
//!
//! Uses the non-streaming `/api/generate` endpoint. Loading a model is done
//! by sending an empty prompt, which Ollama answers once the model is resident.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::SummarizerConfig;
use crate::error::InferenceError;
use crate::ports::{SummarizationEngine, SummaryRequest, SummaryResponse};

/// Summarization engine backed by an Ollama server
#[derive(Debug)]
pub struct OllamaSummarizer {
    client: Client,
    config: SummarizerConfig,
}

impl OllamaSummarizer {
    /// Create a new Ollama summarizer
    pub fn new(config: SummarizerConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.model,
            "Initialized Ollama summarizer"
        );

        Ok(Self { client, config })
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/api/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Generation budget for a summary of at most `max_words` words
    ///
    /// English text averages about four tokens per three words.
    fn token_budget(max_words: u32) -> u32 {
        max_words.saturating_mul(4).div_ceil(3)
    }

    fn prompt(request: &SummaryRequest) -> String {
        format!(
            "Summarize the following text in {} to {} words. \
             Reply with the summary only.\n\n{}",
            request.min_length, request.max_length, request.text
        )
    }

    async fn generate(&self, body: &GenerateRequest<'_>) -> Result<GenerateResponse, InferenceError> {
        let response = self
            .client
            .post(self.api_url("generate"))
            .json(body)
            .send()
            .await
            .map_err(|e| InferenceError::from_reqwest(&e, self.config.timeout_ms))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(InferenceError::ModelNotAvailable(self.config.model.clone()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Generate request failed");
            return Err(InferenceError::ServerError(format!("Status {status}: {body}")));
        }

        response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))
    }
}

/// Ollama-format generate request
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<GenerateOptions>,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

/// Ollama-format generate response
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    model: String,
    #[serde(default)]
    response: String,
    #[serde(default)]
    eval_count: Option<u32>,
}

#[async_trait]
impl SummarizationEngine for OllamaSummarizer {
    #[instrument(skip(self, request), fields(model = %self.config.model, text_len = request.text.len()))]
    async fn summarize(&self, request: SummaryRequest) -> Result<SummaryResponse, InferenceError> {
        let body = GenerateRequest {
            model: &self.config.model,
            prompt: Self::prompt(&request),
            stream: false,
            options: Some(GenerateOptions {
                temperature: self.config.temperature,
                num_predict: Self::token_budget(request.max_length),
            }),
        };

        debug!("Sending summary request to Ollama");
        let response = self.generate(&body).await?;

        let summary = response.response.trim();
        if summary.is_empty() {
            return Err(InferenceError::EmptySummary);
        }

        debug!(tokens = ?response.eval_count, "Summary completed");

        Ok(SummaryResponse {
            summary: summary.to_string(),
            model: response.model,
            eval_count: response.eval_count,
        })
    }

    #[instrument(skip(self), fields(model = %self.config.model))]
    async fn warm_up(&self) -> Result<(), InferenceError> {
        let body = GenerateRequest {
            model: &self.config.model,
            prompt: String::new(),
            stream: false,
            options: None,
        };

        self.generate(&body).await?;
        info!("Summarization model loaded");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, InferenceError> {
        let response = self
            .client
            .get(self.api_url("tags"))
            .timeout(Duration::from_secs(5))
            .send()
            .await;

        match response {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(e) if e.is_timeout() || e.is_connect() => Ok(false),
            Err(e) => Err(InferenceError::RequestFailed(e.to_string())),
        }
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}
