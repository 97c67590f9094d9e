//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{ClickRecorder, ShortenerService, StatsService};
use crate::infrastructure::cache::CacheService;

/// Application state shared across all request handlers.
///
/// Services carry their own injected repositories and cache, so handlers
/// never touch infrastructure directly.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    pub clicks: Arc<ClickRecorder>,
    pub stats: Arc<StatsService>,
    pub cache: Arc<dyn CacheService>,
    pub base_url: String,
}

impl AppState {
    /// Creates the application state.
    pub fn new(
        shortener: Arc<ShortenerService>,
        clicks: Arc<ClickRecorder>,
        stats: Arc<StatsService>,
        cache: Arc<dyn CacheService>,
        base_url: String,
    ) -> Self {
        Self {
            shortener,
            clicks,
            stats,
            cache,
            base_url,
        }
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
