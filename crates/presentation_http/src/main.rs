//! Sift HTTP Server
//!
//! Main entry point for the search and summarize web server.

use std::{sync::Arc, time::Duration};

use application::{SummarizerHandle, SummaryPipeline};
use infrastructure::{
    AppConfig, MokaCache, PageContentAdapter, SummarizationAdapter, TemplateEngine,
    WebSearchAdapter, init_telemetry,
};
use presentation_http::{routes, serve_until, spawn_summarizer_warmup, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before logging so the filter comes from it
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_telemetry(&config.telemetry)?;

    info!("Sift v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load config, using defaults");
    }

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        summarizer_enabled = config.summarizer.enabled,
        model = %config.summarizer.model,
        "Configuration loaded"
    );

    // Initialize adapters
    let search = WebSearchAdapter::new(&config.websearch)?;
    let pages = PageContentAdapter::new(&config.page_fetch)?;
    let cache = MokaCache::with_config(config.cache.moka_config());

    // The summarizer starts out not ready; the warm-up task flips it
    let handle = SummarizerHandle::not_ready();
    let warmup_task = if config.summarizer.enabled {
        let adapter = SummarizationAdapter::new(config.summarizer.clone())?;
        Some(spawn_summarizer_warmup(
            handle.clone(),
            adapter,
            Duration::from_secs(config.summarizer.warmup_retry_secs),
        ))
    } else {
        info!("Summarizer disabled, serving fallback summaries only");
        None
    };

    let pipeline = SummaryPipeline::new(
        Arc::new(search),
        Arc::new(pages),
        handle,
        Arc::new(cache),
        config.pipeline.clone(),
    );

    let state = AppState::new(pipeline, TemplateEngine::new()?);

    // Build router
    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    // Graceful shutdown configuration
    let shutdown_timeout =
        Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    serve_until(listener, app, shutdown_signal(), shutdown_timeout).await?;

    if let Some(task) = warmup_task {
        task.abort();
    }

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for a shutdown signal (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
