//! Health check handler.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Reports service and cache backend health.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always returns 200; a degraded cache is reported in the body since the
/// service keeps working against the store alone.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let cache_up = state.cache.health_check().await;

    Json(HealthResponse {
        status: "ok",
        cache: if cache_up { "up" } else { "down" },
    })
}
