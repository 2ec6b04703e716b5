//! Server loop with bounded graceful shutdown

use std::{
    future::{Future, IntoFuture},
    sync::Arc,
    time::Duration,
};

use axum::Router;
use tokio::{net::TcpListener, sync::Notify};
use tracing::{info, warn};

/// Serve `router` until `shutdown` resolves, then drain open connections
///
/// Connections still busy `grace` after the shutdown signal are abandoned
/// and the function returns.
pub async fn serve_until<F>(
    listener: TcpListener,
    router: Router,
    shutdown: F,
    grace: Duration,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let signalled = Arc::new(Notify::new());
    let trigger = Arc::clone(&signalled);

    let server = axum::serve(listener, router).with_graceful_shutdown(async move {
        shutdown.await;
        info!("Waiting up to {:?} for connections to close...", grace);
        trigger.notify_one();
    });

    let deadline = async {
        signalled.notified().await;
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = server.into_future() => result,
        () = deadline => {
            warn!(grace_secs = grace.as_secs(), "Connections still open after shutdown timeout, closing");
            Ok(())
        }
    }
}
