//! Click recording service.

use std::sync::Arc;

use crate::domain::entities::{ClickEvent, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// Appends click events for redirect traversals.
///
/// Recording is deliberately unconditional: it never checks that the short
/// code exists or is active, so a click racing a delete simply becomes an
/// orphaned event. This keeps the redirect write path to a single insert.
/// The cache is never involved.
pub struct ClickRecorder {
    clicks: Arc<dyn ClickRepository>,
}

impl ClickRecorder {
    /// Creates a new click recorder.
    pub fn new(clicks: Arc<dyn ClickRepository>) -> Self {
        Self { clicks }
    }

    /// Records one click for a short code.
    ///
    /// Called synchronously on the redirect path, before the redirect
    /// response is issued.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn record_click(
        &self,
        short_code: &str,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Result<ClickEvent, AppError> {
        self.clicks
            .insert(NewClick {
                short_code: short_code.to_string(),
                ip_address,
                user_agent,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockClickRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_record_click_passes_through() {
        let mut clicks = MockClickRepository::new();

        clicks
            .expect_insert()
            .withf(|new_click| {
                new_click.short_code == "abc123"
                    && new_click.ip_address.as_deref() == Some("1.1.1.1")
                    && new_click.user_agent.as_deref() == Some("TestBot/1.0")
            })
            .times(1)
            .returning(|new_click| {
                Ok(ClickEvent::new(
                    1,
                    new_click.short_code,
                    Utc::now(),
                    new_click.ip_address,
                    new_click.user_agent,
                ))
            });

        let recorder = ClickRecorder::new(Arc::new(clicks));

        let click = recorder
            .record_click(
                "abc123",
                Some("1.1.1.1".to_string()),
                Some("TestBot/1.0".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(click.short_code, "abc123");
    }

    #[tokio::test]
    async fn test_record_click_without_client_metadata() {
        let mut clicks = MockClickRepository::new();

        clicks
            .expect_insert()
            .times(1)
            .returning(|new_click| {
                Ok(ClickEvent::new(1, new_click.short_code, Utc::now(), None, None))
            });

        let recorder = ClickRecorder::new(Arc::new(clicks));

        let click = recorder.record_click("abc123", None, None).await.unwrap();

        assert!(click.ip_address.is_none());
        assert!(click.user_agent.is_none());
    }
}
