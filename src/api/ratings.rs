//! Ratings API endpoints.
//!
//! Handlers only translate between HTTP and the catalog; filtering, sorting
//! and aggregation live in [`crate::services`].

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, ChartGeometry, RatingsPage, SummaryDto};
use crate::models::RatingItem;
use crate::services::{LoadReport, MediaFilter, SortDirection, SortKey, SortSpec, ViewState};

const DEFAULT_CHART_WIDTH: f64 = 1000.0;
const DEFAULT_CHART_HEIGHT: f64 = 200.0;

#[derive(Debug, Default, Deserialize)]
pub struct RatingsQuery {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub media: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub limit: Option<usize>,
}

impl RatingsQuery {
    /// Builds the view state, defaulting every control that is absent.
    pub fn view_state(&self) -> Result<ViewState, ApiError> {
        let media = self
            .media
            .as_deref()
            .map(str::parse::<MediaFilter>)
            .transpose()
            .map_err(ApiError::validation)?
            .unwrap_or_default();

        let defaults = SortSpec::default();
        let key = self
            .sort
            .as_deref()
            .map(str::parse::<SortKey>)
            .transpose()
            .map_err(ApiError::validation)?
            .unwrap_or(defaults.key);
        let direction = self
            .dir
            .as_deref()
            .map(str::parse::<SortDirection>)
            .transpose()
            .map_err(ApiError::validation)?
            .unwrap_or(defaults.direction);

        Ok(ViewState::default()
            .with_search(self.search.clone().unwrap_or_default())
            .with_media(media)
            .with_sort(SortSpec::new(key, direction)))
    }
}

#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Returns the filtered and sorted ratings.
///
/// # Endpoint
/// `GET /api/ratings?search=&type=&sort=&dir=&limit=`
///
/// # Errors
/// Returns [`ApiError::ValidationError`] for unknown `type`, `sort` or `dir`.
pub async fn list_ratings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RatingsQuery>,
) -> Result<Json<ApiResponse<RatingsPage>>, ApiError> {
    let view_state = query.view_state()?;
    let catalog = &state.catalog;

    let view = catalog.view(&view_state).await;
    let limit = query.limit.unwrap_or(view.len());

    let page = RatingsPage {
        loading: catalog.is_loading().await,
        base_total: catalog.items().await.len(),
        total: view.len(),
        items: view.iter().take(limit).cloned().collect(),
        state: view_state,
    };

    Ok(Json(ApiResponse::success(page)))
}

/// Returns a single rating by its identifier.
///
/// # Endpoint
/// `GET /api/ratings/{id}`
pub async fn get_rating(
    State(state): State<Arc<AppState>>,
    axum::extract::Path(id): axum::extract::Path<String>,
) -> Result<Json<ApiResponse<RatingItem>>, ApiError> {
    let items = state.catalog.items().await;
    let item = items
        .iter()
        .find(|i| i.id == id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Rating", &id))?;

    Ok(Json(ApiResponse::success(item)))
}

/// Returns aggregates over the whole collection plus chart geometry.
///
/// # Endpoint
/// `GET /api/ratings/summary?width=&height=`
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<ApiResponse<SummaryDto>>, ApiError> {
    let width = query.width.unwrap_or(DEFAULT_CHART_WIDTH);
    let height = query.height.unwrap_or(DEFAULT_CHART_HEIGHT);
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(ApiError::validation("Chart width and height must be positive"));
    }

    let summary = state.catalog.summary().await;
    let charts = ChartGeometry {
        width,
        height,
        bar_heights: summary.histogram.bar_heights(height),
        points: summary.timeline.points(),
        path: summary.timeline.svg_path(width, height),
    };

    Ok(Json(ApiResponse::success(SummaryDto {
        summary: (*summary).clone(),
        charts,
    })))
}

/// Returns the featured item chosen when the dataset was loaded.
///
/// # Endpoint
/// `GET /api/ratings/spotlight`
pub async fn get_spotlight(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<Option<RatingItem>>> {
    Json(ApiResponse::success(state.catalog.spotlight().await))
}

/// Re-runs the one-shot load.
///
/// # Endpoint
/// `POST /api/ratings/reload`
///
/// # Errors
/// Returns [`ApiError::Conflict`] while another load is running.
pub async fn reload_ratings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<LoadReport>>, ApiError> {
    let report = state.catalog.reload().await?;
    Ok(Json(ApiResponse::success(report)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_default_view() {
        let state = RatingsQuery::default().view_state().unwrap();
        assert_eq!(state, ViewState::default());
    }

    #[test]
    fn test_query_parsing() {
        let query = RatingsQuery {
            search: Some("  noir ".to_string()),
            media: Some("series".to_string()),
            sort: Some("my_rating".to_string()),
            dir: Some("asc".to_string()),
            limit: None,
        };
        let state = query.view_state().unwrap();
        assert_eq!(state.search, "  noir ");
        assert_eq!(state.media, MediaFilter::Series);
        assert_eq!(state.sort, SortSpec::new(SortKey::MyRating, SortDirection::Asc));
    }

    #[test]
    fn test_invalid_sort_is_validation_error() {
        let query = RatingsQuery {
            sort: Some("popularity".to_string()),
            ..RatingsQuery::default()
        };
        assert!(matches!(
            query.view_state(),
            Err(ApiError::ValidationError(_))
        ));
    }
}
