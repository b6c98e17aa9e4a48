use anyhow::{Context, Result};
use dairo_server::{AppState, build_router};

pub async fn run(state: AppState, bind: &str) -> Result<()> {
    if let Err(e) = state.service.ensure_configured().await {
        // Requests will answer 500 until a key is provided; the server still starts.
        tracing::warn!("[Server] {}", e);
    }

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;
    tracing::info!("[Server] Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("[Server] Stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("[Server] Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("[Server] Shutdown requested");
}
