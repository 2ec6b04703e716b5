//! Sift HTTP presentation layer
//!
//! Serves the search page, runs the pipeline for submitted queries and
//! exposes health endpoints.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
pub mod tasks;

pub use error::ApiError;
pub use routes::create_router;
pub use server::serve_until;
pub use state::AppState;
pub use tasks::spawn_summarizer_warmup;
