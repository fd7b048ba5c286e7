use axum::{
    Router,
    http::{HeaderValue, Uri},
    middleware,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::profile::Profile;
use crate::services::{RatingsCatalog, source_from_config};

mod error;
mod observability;
mod profile;
pub mod ratings;
mod system;
mod types;

pub use error::ApiError;
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    pub catalog: Arc<RatingsCatalog>,

    pub profile: Arc<Profile>,

    pub start_time: std::time::Instant,

    pub started_at: DateTime<Utc>,

    pub prometheus_handle: Option<PrometheusHandle>,
}

/// Builds the shared state. The catalog starts in the loading state; the
/// caller decides when the one-shot load runs.
pub fn create_app_state(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let source = source_from_config(&config.ratings)?;
    let catalog = Arc::new(RatingsCatalog::new(
        source,
        config.ratings.layout.forced(),
        config.ratings.spotlight_min_score,
    ));

    let profile = Arc::new(Profile::resolve(config.profile.path.as_deref())?);

    Ok(Arc::new(AppState {
        config: Arc::new(config),
        catalog,
        profile,
        start_time: std::time::Instant::now(),
        started_at: Utc::now(),
        prometheus_handle,
    }))
}

/// Builds the shared state and waits for the initial load.
pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let state = create_app_state(config, prometheus_handle)?;
    state.catalog.load().await;
    Ok(state)
}

pub fn router(state: Arc<AppState>) -> Router {
    let server = &state.config.server;
    let static_dir = Path::new(&server.static_dir);
    let data_dir = state.config.ratings.data_dir.clone();

    let cors_layer = if server.cors_allowed_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = server
            .cors_allowed_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        CorsLayer::new().allow_origin(origins)
    };

    // Unknown paths fall through to index.html for client-side routing.
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let api_router = create_api_router().with_state(state.clone());

    Router::new()
        .nest("/api", api_router)
        .nest_service("/data", ServeDir::new(data_dir))
        .fallback_service(spa)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(middleware::from_fn(observability::security_headers_middleware))
        .layer(TraceLayer::new_for_http())
}

fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/profile", get(profile::get_profile))
        .route("/ratings", get(ratings::list_ratings))
        .route("/ratings/summary", get(ratings::get_summary))
        .route("/ratings/spotlight", get(ratings::get_spotlight))
        .route("/ratings/reload", post(ratings::reload_ratings))
        .route("/ratings/{id}", get(ratings::get_rating))
        .route("/system/status", get(system::get_status))
        .route("/metrics", get(system::get_metrics))
        .route_layer(middleware::from_fn(observability::logging_middleware))
        .fallback(api_not_found)
}

async fn api_not_found(uri: Uri) -> ApiError {
    ApiError::not_found("Route", uri.path())
}
