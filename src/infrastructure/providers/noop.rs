//! No-op provider for disabled analytics or tests.

use crate::domain::event::AnalyticsEvent;
use crate::domain::provider::AnalyticsProvider;
use crate::error::ProviderError;
use async_trait::async_trait;
use tracing::debug;

/// A provider that accepts every event and does nothing with it.
///
/// # Use Cases
///
/// - Development environments without analytics credentials
/// - Testing scenarios where delivery should be bypassed
/// - Keeping the dispatch pipeline wired while a vendor is turned off
pub struct NoopProvider;

impl NoopProvider {
    /// Creates a new NoopProvider instance.
    pub fn new() -> Self {
        debug!("using NoopProvider (deliveries are discarded)");
        Self
    }
}

impl Default for NoopProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalyticsProvider for NoopProvider {
    fn name(&self) -> &str {
        "noop"
    }

    async fn send(&self, _event: &AnalyticsEvent) -> Result<(), ProviderError> {
        Ok(())
    }
}
