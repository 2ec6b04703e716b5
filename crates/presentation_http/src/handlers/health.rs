//! Health check handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub summarizer: SummarizerStatus,
    pub cache: CacheStatus,
}

/// Whether summaries come from the engine or the sentence fallback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerStatus {
    pub ready: bool,
}

/// Query cache counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStatus {
    pub entries: u64,
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
}

/// Readiness check
///
/// The pipeline serves fallback summaries without the engine, so the server
/// is ready as soon as it listens; the body says which mode it is in.
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let stats = state.pipeline.cache_stats();

    Json(ReadinessResponse {
        ready: true,
        summarizer: SummarizerStatus {
            ready: state.pipeline.summarizer_ready(),
        },
        cache: CacheStatus {
            entries: stats.entries,
            hits: stats.hits,
            misses: stats.misses,
            hit_rate: stats.hit_rate(),
        },
    })
}
