//! DTO for the click statistics endpoint.

use serde::Serialize;

use crate::domain::repositories::UrlStats;

/// Click statistics for a shortened URL.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_clicks: i64,
    pub unique_visitors: i64,
    pub clicks_last_24h: i64,
    pub clicks_last_7d: i64,
}

impl From<UrlStats> for StatsResponse {
    fn from(stats: UrlStats) -> Self {
        Self {
            total_clicks: stats.total_clicks,
            unique_visitors: stats.unique_visitors,
            clicks_last_24h: stats.clicks_last_24h,
            clicks_last_7d: stats.clicks_last_7d,
        }
    }
}
