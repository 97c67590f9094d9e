//! Short code allocation, resolution, and soft deletion.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::entities::{NewUrlRecord, RedirectTarget, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::code_generator::generate_code;

/// TTL for mappings cached on the write path. A freshly created link is
/// trusted, so it stays cached for a week.
pub const WRITE_CACHE_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// TTL for mappings cached by read-repair. Kept short so an entry that
/// outlives a delete on another node expires quickly.
pub const READ_REPAIR_TTL_SECS: u64 = 60 * 60;

/// Outcome of a successful resolution.
///
/// A cache hit carries only the redirect target; full record metadata is
/// available exclusively on a store hit, so administrative callers can tell
/// the two apart instead of trusting synthesized fields.
#[derive(Debug, Clone)]
pub enum ResolvedUrl {
    /// Served from cache; "active enough to redirect" but not ground truth.
    Cached(RedirectTarget),
    /// Served from the store with authoritative metadata.
    Fresh(UrlRecord),
}

impl ResolvedUrl {
    /// The long URL to redirect to.
    pub fn long_url(&self) -> &str {
        match self {
            ResolvedUrl::Cached(target) => &target.long_url,
            ResolvedUrl::Fresh(record) => &record.long_url,
        }
    }
}

/// Orchestrates code allocation and resolution across store and cache.
///
/// The store is the source of truth; the cache is a best-effort acceleration
/// layer kept coherent by write-through on creation, eviction on delete, and
/// read-repair on miss. The two are never updated transactionally — a crash
/// between store commit and cache write leaves a stale entry that read-repair
/// heals within its TTL.
pub struct ShortenerService {
    urls: Arc<dyn UrlRepository>,
    cache: Arc<dyn CacheService>,
    max_code_attempts: usize,
}

impl ShortenerService {
    /// Creates a new shortener service.
    ///
    /// `max_code_attempts` bounds the collision-retry loop for generated
    /// codes; exceeding it yields [`AppError::AllocationExhausted`].
    pub fn new(
        urls: Arc<dyn UrlRepository>,
        cache: Arc<dyn CacheService>,
        max_code_attempts: usize,
    ) -> Self {
        Self {
            urls,
            cache,
            max_code_attempts,
        }
    }

    /// Creates a shortened URL.
    ///
    /// With `custom_alias`, the alias is the code verbatim (the HTTP boundary
    /// has already validated charset and length). Without one, a code is
    /// generated and re-derived from a freshened seed on collision.
    ///
    /// On success the mapping is written through to the cache with
    /// [`WRITE_CACHE_TTL_SECS`]; cache failures are logged, never fatal.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasTaken`] if the alias is held by any record,
    /// active or soft-deleted — reservation is permanent. Two concurrent
    /// requests for the same alias may both pass the existence check; the
    /// store's unique constraint settles the race and the loser still gets
    /// `AliasTaken`.
    ///
    /// Returns [`AppError::AllocationExhausted`] when generated codes keep
    /// colliding past the retry budget.
    pub async fn shorten_url(
        &self,
        long_url: String,
        custom_alias: Option<String>,
    ) -> Result<UrlRecord, AppError> {
        let record = match custom_alias {
            Some(alias) => self.insert_with_alias(long_url, alias).await?,
            None => self.insert_with_generated_code(long_url).await?,
        };

        info!("Created short link {} -> {}", record.short_code, record.long_url);

        if let Err(e) = self
            .cache
            .set_url(&record.short_code, &record.long_url, WRITE_CACHE_TTL_SECS)
            .await
        {
            warn!("Failed to cache new link {}: {}", record.short_code, e);
        }

        Ok(record)
    }

    /// Resolves a short code for redirecting.
    ///
    /// Consults the cache first; on a miss, queries the store for an *active*
    /// record and read-repairs the cache with [`READ_REPAIR_TTL_SECS`].
    /// Inactive codes resolve to `None` regardless of cache state, and
    /// negative results are never cached.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors. Cache errors are
    /// treated as misses.
    pub async fn resolve_url(&self, short_code: &str) -> Result<Option<ResolvedUrl>, AppError> {
        match self.cache.get_url(short_code).await {
            Ok(Some(long_url)) => {
                return Ok(Some(ResolvedUrl::Cached(RedirectTarget {
                    short_code: short_code.to_string(),
                    long_url,
                })));
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Cache lookup failed for {}: {}", short_code, e);
            }
        }

        let Some(record) = self.urls.find_active_by_code(short_code).await? else {
            return Ok(None);
        };

        if let Err(e) = self
            .cache
            .set_url(short_code, &record.long_url, READ_REPAIR_TTL_SECS)
            .await
        {
            warn!("Read-repair failed for {}: {}", short_code, e);
        }

        Ok(Some(ResolvedUrl::Fresh(record)))
    }

    /// Looks up the authoritative record for a short code.
    ///
    /// Store-only and filtered on the active flag; administrative views must
    /// use this instead of [`Self::resolve_url`] so they never see data
    /// reconstructed from a cache entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get_record(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        self.urls.find_active_by_code(short_code).await
    }

    /// Soft-deletes a shortened URL.
    ///
    /// Deactivates the record and evicts its cache entry. Unknown or already
    /// inactive codes are a no-op — delete is idempotent and never errors on
    /// a missing code. The code stays reserved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn delete_url(&self, short_code: &str) -> Result<(), AppError> {
        let deactivated = self.urls.deactivate(short_code).await?;

        if deactivated {
            info!("Soft-deleted short link {}", short_code);

            if let Err(e) = self.cache.invalidate(short_code).await {
                warn!("Failed to evict cache entry for {}: {}", short_code, e);
            }
        }

        Ok(())
    }

    async fn insert_with_alias(
        &self,
        long_url: String,
        alias: String,
    ) -> Result<UrlRecord, AppError> {
        // Reservation is permanent: a soft-deleted record still holds its code.
        if self.urls.find_by_code(&alias).await?.is_some() {
            return Err(AppError::alias_taken(alias));
        }

        self.urls
            .insert(NewUrlRecord {
                short_code: alias,
                long_url,
            })
            .await
    }

    async fn insert_with_generated_code(&self, long_url: String) -> Result<UrlRecord, AppError> {
        let mut seed = format!("{}{}", long_url, Utc::now().timestamp_micros());

        for _ in 0..self.max_code_attempts {
            let code = generate_code(&seed);

            if self.urls.find_by_code(&code).await?.is_none() {
                match self
                    .urls
                    .insert(NewUrlRecord {
                        short_code: code.clone(),
                        long_url: long_url.clone(),
                    })
                    .await
                {
                    Ok(record) => return Ok(record),
                    // Lost the insert race; treat like a collision and retry.
                    Err(AppError::AliasTaken { .. }) => {
                        debug!("Insert race lost for generated code {}", code);
                    }
                    Err(e) => return Err(e),
                }
            } else {
                debug!("Generated code {} collides, retrying", code);
            }

            seed = format!("{}{}", long_url, rand::random::<u64>());
        }

        Err(AppError::AllocationExhausted {
            attempts: self.max_code_attempts,
        })
    }
}
