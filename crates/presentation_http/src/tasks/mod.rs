//! Background tasks for the HTTP presentation layer

mod summarizer_warmup;

pub use summarizer_warmup::spawn_summarizer_warmup;
