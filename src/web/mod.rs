//! HTTP shell: listing page, htmx partials, JSON API and probes.

pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
pub mod templates;

pub use router::app_router;
pub use state::AppState;

use anyhow::Context;
use tracing::info;

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(state: AppState, addr: &str) -> anyhow::Result<()> {
    let app = app_router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Web server listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
