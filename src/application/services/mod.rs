//! Application services orchestrating domain operations.
//!
//! - [`ShortenerService`] - code allocation, resolution, soft deletion
//! - [`ClickRecorder`] - unconditional click event appends
//! - [`StatsService`] - live click statistics

pub mod click_service;
pub mod shortener_service;
pub mod stats_service;

pub use click_service::ClickRecorder;
pub use shortener_service::{ResolvedUrl, ShortenerService};
pub use stats_service::StatsService;
