//! Repository trait for click recording and counting.

use crate::domain::entities::{ClickEvent, NewClick};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Aggregated click statistics for a single short code.
///
/// Computed live from click events at call time; there are no materialized
/// rollups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlStats {
    pub total_clicks: i64,
    pub unique_visitors: i64,
    pub clicks_last_24h: i64,
    pub clicks_last_7d: i64,
}

/// Repository interface for click events.
///
/// Recording is append-only and unconditional: a click may reference a short
/// code that no longer exists or was never allocated.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends a click event. Never validates the short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_click: NewClick) -> Result<ClickEvent, AppError>;

    /// Counts all clicks ever recorded for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_total(&self, short_code: &str) -> Result<i64, AppError>;

    /// Counts distinct non-null IP addresses among a code's clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_distinct_visitors(&self, short_code: &str) -> Result<i64, AppError>;

    /// Counts clicks recorded at or after `since`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_since(
        &self,
        short_code: &str,
        since: DateTime<Utc>,
    ) -> Result<i64, AppError>;
}
