//! AI Core - Abstractive summarization engine
//!
//! Provides the summarization engine abstraction and an adapter for a local
//! Ollama server (`/api/generate`). The engine may take a while to load its
//! model; callers are expected to warm it up before relying on it.

pub mod config;
pub mod error;
pub mod ollama;
pub mod ports;

pub use config::SummarizerConfig;
pub use error::InferenceError;
pub use ollama::OllamaSummarizer;
pub use ports::{SummarizationEngine, SummaryRequest, SummaryResponse};
