//! PostgreSQL implementation of the click repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ClickEvent, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ClickRow {
    id: i64,
    short_code: String,
    clicked_at: DateTime<Utc>,
    ip_address: Option<String>,
    user_agent: Option<String>,
}

impl From<ClickRow> for ClickEvent {
    fn from(row: ClickRow) -> Self {
        ClickEvent::new(
            row.id,
            row.short_code,
            row.clicked_at,
            row.ip_address,
            row.user_agent,
        )
    }
}

/// PostgreSQL repository for click events.
///
/// There is no foreign key from `clicks` to `urls`, so inserts never fail on
/// unknown codes and counting queries see orphaned clicks too.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn insert(&self, new_click: NewClick) -> Result<ClickEvent, AppError> {
        let row = sqlx::query_as::<_, ClickRow>(
            "INSERT INTO clicks (short_code, ip_address, user_agent)
             VALUES ($1, $2, $3)
             RETURNING id, short_code, clicked_at, ip_address, user_agent",
        )
        .bind(&new_click.short_code)
        .bind(&new_click.ip_address)
        .bind(&new_click.user_agent)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn count_total(&self, short_code: &str) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM clicks WHERE short_code = $1",
        )
        .bind(short_code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn count_distinct_visitors(&self, short_code: &str) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(DISTINCT ip_address) FROM clicks
             WHERE short_code = $1 AND ip_address IS NOT NULL",
        )
        .bind(short_code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn count_since(
        &self,
        short_code: &str,
        since: DateTime<Utc>,
    ) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM clicks WHERE short_code = $1 AND clicked_at >= $2",
        )
        .bind(short_code)
        .bind(since)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }
}
