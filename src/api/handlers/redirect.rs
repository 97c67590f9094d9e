//! Handler for short URL redirects.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use serde_json::json;
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code (cache first, store with read-repair on miss)
/// 2. Record one click event with the caller's IP and user agent
/// 3. Return 307 Temporary Redirect
///
/// Click recording is synchronous and happens before the response; the added
/// latency is the accepted price for not losing events on shutdown.
///
/// # Errors
///
/// Returns 404 Not Found for unknown or soft-deleted codes.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let Some(resolved) = state.shortener.resolve_url(&code).await? else {
        return Err(AppError::not_found(
            "Short link not found",
            json!({ "code": code }),
        ));
    };

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    state
        .clicks
        .record_click(&code, Some(addr.ip().to_string()), user_agent)
        .await?;

    Ok(Redirect::temporary(resolved.long_url()))
}
