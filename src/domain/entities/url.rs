//! Url entity representing a short code to long URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL record as stored in the database.
///
/// `short_code` is unique across *all* records ever inserted. Soft-deleted
/// records keep their code reserved, so a code is never reassigned.
#[derive(Debug, Clone)]
pub struct UrlRecord {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        short_code: String,
        long_url: String,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            short_code,
            long_url,
            created_at,
            updated_at,
            is_active,
        }
    }

    /// Returns true if the record has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        !self.is_active
    }
}

/// Input data for creating a new shortened URL.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub short_code: String,
    pub long_url: String,
}

/// The minimal data needed to serve a redirect.
///
/// This is what a cache hit yields: the cache stores only the long URL, so no
/// record metadata (`id`, `created_at`, `is_active`) is available. Callers
/// needing authoritative metadata must go through the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    pub short_code: String,
    pub long_url: String,
}
