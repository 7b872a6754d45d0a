//! Provider that writes events to the log instead of a vendor.

use crate::domain::event::AnalyticsEvent;
use crate::domain::provider::AnalyticsProvider;
use crate::error::ProviderError;
use async_trait::async_trait;
use tracing::debug;

/// A provider whose "delivery" is a structured debug log record.
///
/// Useful during development to see exactly what vendor adapters would
/// receive. This is the one place event content is written out: writing the
/// payload is this provider's delivery mechanism. The dispatcher's own
/// records stay content-free.
pub struct LogProvider;

impl LogProvider {
    /// Creates a new LogProvider instance.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalyticsProvider for LogProvider {
    fn name(&self) -> &str {
        "log"
    }

    async fn send(&self, event: &AnalyticsEvent) -> Result<(), ProviderError> {
        let payload = serde_json::to_string(event)
            .map_err(|e| ProviderError::Rejected(format!("unserializable event: {e}")))?;

        debug!(event = %event.name, payload = %payload, "log provider delivery");

        Ok(())
    }
}
