use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiResponse, AppState};
use crate::profile::Profile;

/// Returns the biographical document.
///
/// # Endpoint
/// `GET /api/profile`
pub async fn get_profile(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Profile>> {
    Json(ApiResponse::success((*state.profile).clone()))
}
