//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{code}`                  - Short link redirect
//! - `GET    /health`                  - Health check
//! - `POST   /api/v1/shorten`          - Create a short link
//! - `GET    /api/v1/urls/{code}`      - Link details
//! - `DELETE /api/v1/urls/{code}`      - Soft-delete a link
//! - `GET    /api/v1/urls/{code}/stats` - Click statistics

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{
    delete_url_handler, health_handler, redirect_handler, shorten_handler, stats_handler,
    url_details_handler,
};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let api_router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route(
            "/urls/{code}",
            get(url_details_handler).delete(delete_url_handler),
        )
        .route("/urls/{code}/stats", get(stats_handler));

    Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api/v1", api_router)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
