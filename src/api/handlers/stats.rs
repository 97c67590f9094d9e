//! Handler for click statistics.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns click statistics for a shortened URL.
///
/// # Endpoint
///
/// `GET /api/v1/urls/{code}/stats`
///
/// Counts are recomputed from click events on every call; the time windows
/// end at the moment of the request.
///
/// # Errors
///
/// Returns 404 Not Found for unknown or soft-deleted codes.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    if state.shortener.get_record(&code).await?.is_none() {
        return Err(AppError::not_found(
            "Short link not found",
            json!({ "code": code }),
        ));
    }

    let stats = state.stats.url_stats(&code).await?;

    Ok(Json(stats.into()))
}
