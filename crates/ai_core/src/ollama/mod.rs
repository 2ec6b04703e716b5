//! Ollama summarization adapter

mod client;

pub use client::OllamaSummarizer;
