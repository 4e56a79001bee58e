mod error;
mod handlers;
mod router;
mod state;

pub use error::{ApiError, ErrorBody};
pub use handlers::{HealthResponse, SmsResponse};
pub use router::build_router;
pub use state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;

/// Bind `addr` and serve the demo API until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    let local = listener.local_addr().unwrap_or(addr);
    tracing::info!("listening on http://{}", local);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
