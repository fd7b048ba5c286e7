//! Serve command handler

use anyhow::Context;
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::signal;
use tracing::{error, info};

use crate::api;
use crate::config::Config;

pub async fn cmd_serve(
    mut config: Config,
    port: Option<u16>,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<()> {
    if let Some(port) = port {
        config.server.port = port;
    }

    info!("Folio v{} starting...", env!("CARGO_PKG_VERSION"));

    let addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let state = api::create_app_state(config, prometheus_handle)?;

    let catalog = state.catalog.clone();
    let load_handle = tokio::spawn(async move {
        catalog.load().await;
    });

    let app = api::router(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🌐 Web Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server error")?;

    load_handle.abort();
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }
}
