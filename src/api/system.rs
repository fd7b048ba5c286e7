//! System API endpoints: status and metrics.

use axum::{Json, extract::State, response::IntoResponse};
use std::sync::Arc;

use super::{ApiResponse, AppState, SystemStatus};

/// Returns process and dataset status.
///
/// # Endpoint
/// `GET /api/system/status`
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<ApiResponse<SystemStatus>> {
    let status = SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        started_at: state.started_at.to_rfc3339(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        metrics_enabled: state.prometheus_handle.is_some(),
        ratings: state.catalog.status().await,
    };

    Json(ApiResponse::success(status))
}

pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.prometheus_handle.as_ref().map_or_else(
        || "Metrics not enabled or failed to initialize".to_string(),
        metrics_exporter_prometheus::PrometheusHandle::render,
    )
}
