//! Click entity representing a single redirect traversal.

use chrono::{DateTime, Utc};

/// A click event recorded when a shortened link is accessed.
///
/// Clicks reference their URL by short code value rather than record id, and
/// are immutable once created. Soft-deleting a URL leaves its click history
/// intact.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub id: i64,
    pub short_code: String,
    pub clicked_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl ClickEvent {
    /// Creates a new ClickEvent instance.
    ///
    /// IP and user agent are optional to handle cases where client
    /// information is unavailable.
    pub fn new(
        id: i64,
        short_code: String,
        clicked_at: DateTime<Utc>,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            id,
            short_code,
            clicked_at,
            ip_address,
            user_agent,
        }
    }
}

/// Input data for recording a new click event.
///
/// The timestamp is set by the database at insert time. The short code is not
/// required to reference an existing URL record.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub short_code: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}
