//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::{AppError, is_unique_violation_on_code};

/// Row shape shared by all `urls` queries.
#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    short_code: String,
    long_url: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
    is_active: bool,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord::new(
            row.id,
            row.short_code,
            row.long_url,
            row.created_at,
            row.updated_at,
            row.is_active,
        )
    }
}

const URL_COLUMNS: &str = "id, short_code, long_url, created_at, updated_at, is_active";

/// PostgreSQL repository for URL records.
///
/// The `urls_short_code_key` unique constraint is the final arbiter of code
/// uniqueness; see [`UrlRepository::insert`].
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert(&self, new_url: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let sql = format!(
            "INSERT INTO urls (short_code, long_url) VALUES ($1, $2) RETURNING {URL_COLUMNS}"
        );

        let row = sqlx::query_as::<_, UrlRow>(&sql)
            .bind(&new_url.short_code)
            .bind(&new_url.long_url)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation_on_code(&e) {
                    AppError::alias_taken(&new_url.short_code)
                } else {
                    e.into()
                }
            })?;

        Ok(row.into())
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let sql = format!("SELECT {URL_COLUMNS} FROM urls WHERE short_code = $1");

        let row = sqlx::query_as::<_, UrlRow>(&sql)
            .bind(short_code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn find_active_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let sql = format!("SELECT {URL_COLUMNS} FROM urls WHERE short_code = $1 AND is_active");

        let row = sqlx::query_as::<_, UrlRow>(&sql)
            .bind(short_code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn deactivate(&self, short_code: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE urls SET is_active = FALSE, updated_at = now()
             WHERE short_code = $1 AND is_active",
        )
        .bind(short_code)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
