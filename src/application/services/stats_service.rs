//! Click statistics aggregation.

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::repositories::{ClickRepository, UrlStats};
use crate::error::AppError;

/// Computes live click statistics for a short code.
///
/// Stats are four independent counting queries recomputed on every call —
/// no materialized rollups and no caching, so a click is visible in the
/// next stats read.
pub struct StatsService {
    clicks: Arc<dyn ClickRepository>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(clicks: Arc<dyn ClickRepository>) -> Self {
        Self { clicks }
    }

    /// Aggregates click statistics for a short code.
    ///
    /// `unique_visitors` counts distinct non-null IP addresses. The 24h and
    /// 7d windows end at the current instant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn url_stats(&self, short_code: &str) -> Result<UrlStats, AppError> {
        let now = Utc::now();

        let total_clicks = self.clicks.count_total(short_code).await?;
        let unique_visitors = self.clicks.count_distinct_visitors(short_code).await?;
        let clicks_last_24h = self
            .clicks
            .count_since(short_code, now - Duration::hours(24))
            .await?;
        let clicks_last_7d = self
            .clicks
            .count_since(short_code, now - Duration::days(7))
            .await?;

        Ok(UrlStats {
            total_clicks,
            unique_visitors,
            clicks_last_24h,
            clicks_last_7d,
        })
    }

    /// Counts all clicks ever recorded for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn total_clicks(&self, short_code: &str) -> Result<i64, AppError> {
        self.clicks.count_total(short_code).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockClickRepository;
    use chrono::{DateTime, Utc};

    #[tokio::test]
    async fn test_url_stats_aggregates_four_counts() {
        let mut clicks = MockClickRepository::new();

        clicks
            .expect_count_total()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(42));
        clicks
            .expect_count_distinct_visitors()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(17));

        let mut windows: Vec<DateTime<Utc>> = Vec::new();
        clicks
            .expect_count_since()
            .times(2)
            .returning(move |_, since| {
                windows.push(since);
                // First call is the 24h window, second the 7d window.
                if windows.len() == 1 { Ok(5) } else { Ok(20) }
            });

        let service = StatsService::new(Arc::new(clicks));

        let stats = service.url_stats("abc123").await.unwrap();

        assert_eq!(
            stats,
            UrlStats {
                total_clicks: 42,
                unique_visitors: 17,
                clicks_last_24h: 5,
                clicks_last_7d: 20,
            }
        );
    }

    #[tokio::test]
    async fn test_url_stats_windows_end_now() {
        let mut clicks = MockClickRepository::new();

        clicks.expect_count_total().returning(|_| Ok(0));
        clicks.expect_count_distinct_visitors().returning(|_| Ok(0));

        let before = Utc::now();
        clicks
            .expect_count_since()
            .times(2)
            .returning(move |_, since| {
                // Both windows must start in the past, within their span.
                assert!(since < Utc::now());
                assert!(since >= before - Duration::days(7) - Duration::minutes(1));
                Ok(0)
            });

        let service = StatsService::new(Arc::new(clicks));

        service.url_stats("abc123").await.unwrap();
    }

    #[tokio::test]
    async fn test_stats_for_unknown_code_are_zero() {
        let mut clicks = MockClickRepository::new();

        clicks.expect_count_total().returning(|_| Ok(0));
        clicks.expect_count_distinct_visitors().returning(|_| Ok(0));
        clicks.expect_count_since().returning(|_, _| Ok(0));

        let service = StatsService::new(Arc::new(clicks));

        let stats = service.url_stats("ghost1").await.unwrap();

        assert_eq!(stats.total_clicks, 0);
        assert_eq!(stats.unique_visitors, 0);
    }
}
