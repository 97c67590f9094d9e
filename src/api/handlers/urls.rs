//! Handlers for URL details and deletion.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::url_details::UrlDetailsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns authoritative details for a shortened URL.
///
/// # Endpoint
///
/// `GET /api/v1/urls/{code}`
///
/// Reads the store directly — a cache entry is good enough for redirecting
/// but not for administrative views, so this endpoint never consults it.
/// The click count is computed live.
///
/// # Errors
///
/// Returns 404 Not Found for unknown or soft-deleted codes.
pub async fn url_details_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<UrlDetailsResponse>, AppError> {
    let Some(record) = state.shortener.get_record(&code).await? else {
        return Err(AppError::not_found(
            "Short link not found",
            json!({ "code": code }),
        ));
    };

    let total_clicks = state.stats.total_clicks(&record.short_code).await?;
    let short_url = state.short_url(&record.short_code);

    Ok(Json(UrlDetailsResponse {
        code: record.short_code,
        short_url,
        long_url: record.long_url,
        created_at: record.created_at,
        updated_at: record.updated_at,
        total_clicks,
    }))
}

/// Soft-deletes a shortened URL.
///
/// # Endpoint
///
/// `DELETE /api/v1/urls/{code}`
///
/// Idempotent: deleting an unknown or already deleted code succeeds with the
/// same 204 response. The code stays reserved and click history is kept.
pub async fn delete_url_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, AppError> {
    state.shortener.delete_url(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}
