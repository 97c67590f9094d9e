//! Repository trait for shortened URL data access.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the URL store of record.
///
/// The store owns the global uniqueness invariant on `short_code`: the
/// existence checks here are advisory, and a concurrent insert race is always
/// settled by the unique constraint inside [`UrlRepository::insert`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new URL record with `is_active = true`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasTaken`] if the short code is already held by
    /// any record, active or soft-deleted — including when a concurrent
    /// insert wins the race after the caller's existence check passed.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_url: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by short code regardless of its active flag.
    ///
    /// Used for reservation checks: a soft-deleted record still holds its
    /// code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds an active record by short code.
    ///
    /// Inactive (soft-deleted) codes are reported as `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_active_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Soft-deletes a record by clearing its active flag and stamping
    /// `updated_at`.
    ///
    /// Returns `Ok(true)` if an active record was found and deactivated,
    /// `Ok(false)` if the code is unknown or already inactive.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn deactivate(&self, short_code: &str) -> Result<bool, AppError>;
}
