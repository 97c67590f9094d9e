//! Cache service trait and error types.

use async_trait::async_trait;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),

    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching short code → long URL mappings.
///
/// The cache is never authoritative: entries may be absent, stale-but-correct,
/// or briefly point at a URL whose record has since been deactivated.
/// Implementations must be thread-safe and fail open — a cache outage degrades
/// to store lookups, it never fails a request.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the long URL for a short code from cache.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss
    ///
    /// # Errors
    ///
    /// Production implementations log errors and report a miss instead of
    /// returning them; callers must still treat an `Err` as a miss.
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>>;

    /// Stores a URL mapping with the given TTL.
    ///
    /// The TTL is always explicit: the write path caches fresh mappings for a
    /// long period while read-repair uses a short one, and that asymmetry is
    /// decided by the caller.
    ///
    /// # Errors
    ///
    /// Implementations should log failures and return `Ok(())`; a lost cache
    /// write only costs a later read-repair.
    async fn set_url(
        &self,
        short_code: &str,
        long_url: &str,
        ttl_seconds: u64,
    ) -> CacheResult<()>;

    /// Removes a cached URL mapping.
    ///
    /// Used when a link is soft-deleted.
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers.
    async fn invalidate(&self, short_code: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health endpoint to report cache status.
    async fn health_check(&self) -> bool;
}
