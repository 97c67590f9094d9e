#![allow(dead_code)]

//! In-memory fakes and test wiring.
//!
//! The fakes enforce the same invariants as the Postgres implementations —
//! in particular the unique-constraint arbiter on `short_code` — so conflict
//! and race paths behave like production.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use linkcut::application::services::{ClickRecorder, ShortenerService, StatsService};
use linkcut::domain::entities::{ClickEvent, NewClick, NewUrlRecord, UrlRecord};
use linkcut::domain::repositories::{ClickRepository, UrlRepository};
use linkcut::error::AppError;
use linkcut::infrastructure::cache::{CacheResult, CacheService};
use linkcut::state::AppState;

/// URL store fake backed by a Vec, with the unique-code arbiter of the real
/// schema: an insert for a code held by any record fails with `AliasTaken`.
pub struct InMemoryUrlRepository {
    rows: Mutex<Vec<UrlRecord>>,
    next_id: AtomicI64,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn record_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn insert(&self, new_url: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let mut rows = self.rows.lock().unwrap();

        if rows.iter().any(|r| r.short_code == new_url.short_code) {
            return Err(AppError::alias_taken(new_url.short_code));
        }

        let record = UrlRecord::new(
            self.next_id.fetch_add(1, Ordering::SeqCst),
            new_url.short_code,
            new_url.long_url,
            Utc::now(),
            None,
            true,
        );
        rows.push(record.clone());

        Ok(record)
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|r| r.short_code == short_code).cloned())
    }

    async fn find_active_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|r| r.short_code == short_code && r.is_active)
            .cloned())
    }

    async fn deactivate(&self, short_code: &str) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();

        match rows
            .iter_mut()
            .find(|r| r.short_code == short_code && r.is_active)
        {
            Some(row) => {
                row.is_active = false;
                row.updated_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Click store fake; append-only, no code validation, like the real table.
pub struct InMemoryClickRepository {
    rows: Mutex<Vec<ClickEvent>>,
    next_id: AtomicI64,
}

impl InMemoryClickRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Inserts a click with an explicit timestamp, for window tests.
    pub fn seed_click(&self, short_code: &str, ip: Option<&str>, clicked_at: DateTime<Utc>) {
        let mut rows = self.rows.lock().unwrap();
        rows.push(ClickEvent::new(
            self.next_id.fetch_add(1, Ordering::SeqCst),
            short_code.to_string(),
            clicked_at,
            ip.map(String::from),
            None,
        ));
    }

    pub fn clicks_for(&self, short_code: &str) -> Vec<ClickEvent> {
        let rows = self.rows.lock().unwrap();
        rows.iter()
            .filter(|c| c.short_code == short_code)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ClickRepository for InMemoryClickRepository {
    async fn insert(&self, new_click: NewClick) -> Result<ClickEvent, AppError> {
        let mut rows = self.rows.lock().unwrap();

        let click = ClickEvent::new(
            self.next_id.fetch_add(1, Ordering::SeqCst),
            new_click.short_code,
            Utc::now(),
            new_click.ip_address,
            new_click.user_agent,
        );
        rows.push(click.clone());

        Ok(click)
    }

    async fn count_total(&self, short_code: &str) -> Result<i64, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|c| c.short_code == short_code).count() as i64)
    }

    async fn count_distinct_visitors(&self, short_code: &str) -> Result<i64, AppError> {
        let rows = self.rows.lock().unwrap();
        let ips: HashSet<&str> = rows
            .iter()
            .filter(|c| c.short_code == short_code)
            .filter_map(|c| c.ip_address.as_deref())
            .collect();
        Ok(ips.len() as i64)
    }

    async fn count_since(&self, short_code: &str, since: DateTime<Utc>) -> Result<i64, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|c| c.short_code == short_code && c.clicked_at >= since)
            .count() as i64)
    }
}

/// TTL-respecting in-memory cache.
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, (String, Instant)>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn contains(&self, short_code: &str) -> bool {
        let entries = self.entries.lock().unwrap();
        entries
            .get(short_code)
            .is_some_and(|(_, expires)| Instant::now() < *expires)
    }

    /// Drops an entry directly, simulating a lost cache write or expiry.
    pub fn remove(&self, short_code: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(short_code);
    }

    /// Plants an entry directly, bypassing the write path.
    pub fn seed(&self, short_code: &str, long_url: &str, ttl: Duration) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            short_code.to_string(),
            (long_url.to_string(), Instant::now() + ttl),
        );
    }
}

#[async_trait]
impl CacheService for InMemoryCache {
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.get(short_code).and_then(|(url, expires)| {
            if Instant::now() < *expires {
                Some(url.clone())
            } else {
                None
            }
        }))
    }

    async fn set_url(&self, short_code: &str, long_url: &str, ttl_seconds: u64) -> CacheResult<()> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            short_code.to_string(),
            (
                long_url.to_string(),
                Instant::now() + Duration::from_secs(ttl_seconds),
            ),
        );
        Ok(())
    }

    async fn invalidate(&self, short_code: &str) -> CacheResult<()> {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(short_code);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Everything a test needs to reach behind the HTTP surface.
pub struct TestContext {
    pub state: AppState,
    pub urls: Arc<InMemoryUrlRepository>,
    pub clicks: Arc<InMemoryClickRepository>,
    pub cache: Arc<InMemoryCache>,
}

pub fn create_test_context() -> TestContext {
    let urls = Arc::new(InMemoryUrlRepository::new());
    let clicks = Arc::new(InMemoryClickRepository::new());
    let cache = Arc::new(InMemoryCache::new());

    let shortener = Arc::new(ShortenerService::new(urls.clone(), cache.clone(), 10));
    let recorder = Arc::new(ClickRecorder::new(clicks.clone()));
    let stats = Arc::new(StatsService::new(clicks.clone()));

    let state = AppState::new(
        shortener,
        recorder,
        stats,
        cache.clone(),
        "https://s.example.com".to_string(),
    );

    TestContext {
        state,
        urls,
        clicks,
        cache,
    }
}

/// Injects a fixed peer address so `ConnectInfo` extraction works under
/// `axum_test::TestServer`.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(axum::extract::ConnectInfo(addr));
        self.inner.call(req)
    }
}

/// Builds a test server over the full application router.
pub fn test_server(state: AppState) -> axum_test::TestServer {
    let app = linkcut::routes::app_router(state).layer(MockConnectInfoLayer);
    axum_test::TestServer::new(app).unwrap()
}
