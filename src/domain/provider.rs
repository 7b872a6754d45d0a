//! Delivery capability trait implemented by vendor adapters.

use crate::domain::event::AnalyticsEvent;
use crate::error::ProviderError;
use async_trait::async_trait;

/// Capability for delivering one event to one analytics backend.
///
/// Implementations are selected at startup by the
/// [`crate::infrastructure::registry::ProviderRegistry`] and injected into
/// the dispatcher, which takes ownership only for the duration of one
/// dispatch call. Providers must be stateless from the dispatcher's point of
/// view: they may be invoked for many events concurrently.
///
/// A failing implementation cannot affect other providers or the caller.
/// The dispatcher races each `send` against its own deadline, converts
/// errors into failed outcomes, and discards results that arrive after the
/// deadline.
///
/// # Implementations
///
/// - [`crate::infrastructure::providers::NoopProvider`] - Discards every event
/// - [`crate::infrastructure::providers::LogProvider`] - Writes events to the log
/// - Vendor adapters (GA4, Mixpanel, ...) registered by the host service
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsProvider: Send + Sync {
    /// Stable identifier used in log records and outcomes.
    ///
    /// Never used for routing decisions.
    fn name(&self) -> &str;

    /// Attempts to deliver `event` to the backend.
    ///
    /// Typically performs network I/O. Implementations should honor
    /// cancellation: the dispatcher drops this future when the attempt's
    /// deadline fires.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when delivery fails. The dispatcher records
    /// it as a failed outcome and never propagates it further.
    async fn send(&self, event: &AnalyticsEvent) -> Result<(), ProviderError>;
}
