//! DTO for the URL details endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Authoritative details for a shortened URL.
///
/// Always built from a store record, never from cache, so the metadata here
/// is ground truth.
#[derive(Debug, Serialize)]
pub struct UrlDetailsResponse {
    pub code: String,
    pub short_url: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub total_clicks: i64,
}
