//! Built-in analytics providers.
//!
//! Provides two [`crate::domain::provider::AnalyticsProvider`] implementations:
//! - [`NoopProvider`] - Discards every event (disabled analytics, tests)
//! - [`LogProvider`] - Writes events to the log (development backend)
//!
//! Vendor adapters (GA4, Mixpanel, ...) live in the host service and are
//! registered through [`crate::infrastructure::registry::ProviderRegistry`].

mod log;
mod noop;

pub use log::LogProvider;
pub use noop::NoopProvider;
