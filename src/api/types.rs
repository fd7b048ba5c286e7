use serde::Serialize;

use crate::models::RatingItem;
use crate::services::stats::{ChartPoint, RatingsSummary};
use crate::services::{CatalogStatus, ViewState};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// One page of the derived ratings view.
#[derive(Debug, Serialize)]
pub struct RatingsPage {
    pub loading: bool,
    pub state: ViewState,
    /// Size of the unfiltered collection.
    pub base_total: usize,
    /// Size of the filtered view before `limit` applies.
    pub total: usize,
    pub items: Vec<RatingItem>,
}

/// Chart-ready geometry computed from the summary.
#[derive(Debug, Serialize)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub bar_heights: Vec<f64>,
    pub points: Vec<ChartPoint>,
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryDto {
    #[serde(flatten)]
    pub summary: RatingsSummary,
    pub charts: ChartGeometry,
}

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub started_at: String,
    pub uptime_seconds: u64,
    pub metrics_enabled: bool,
    pub ratings: CatalogStatus,
}
