//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/v1/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page", "custom_alias": "promo" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request on validation failure, 409 Conflict when the
/// custom alias is already reserved (by any record, including soft-deleted
/// ones), and 500 when code allocation exhausts its retry budget.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let record = state
        .shortener
        .shorten_url(payload.url, payload.custom_alias)
        .await?;

    let short_url = state.short_url(&record.short_code);

    Ok(Json(ShortenResponse {
        code: record.short_code,
        short_url,
        long_url: record.long_url,
        created_at: record.created_at,
    }))
}
