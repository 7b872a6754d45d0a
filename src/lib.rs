//! # Redirect Analytics
//!
//! Best-effort analytics event dispatch for URL redirect services.
//!
//! On every redirect the host service may emit a `redirect_click` event to
//! zero or more external analytics backends (GA4, Mixpanel, an in-house
//! collector). This crate is the routing core: it takes one neutral event and
//! a configured list of provider adapters and delivers the event to all of
//! them concurrently, under a per-provider time budget, without ever failing
//! or delaying the caller.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Event model, provider capability trait,
//!   attempt outcomes, and the background dispatch worker
//! - **Application Layer** ([`application`]) - The dispatcher service and
//!   timeout resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - Built-in providers and
//!   the provider registry
//!
//! ## Guarantees
//!
//! - Dispatch never returns an error, whatever the providers do
//! - One slow or down vendor cannot delay or mask another vendor's delivery
//! - Total dispatch latency is bounded by the per-provider timeout, not by
//!   the sum of provider latencies
//!
//! ## Non-Guarantees
//!
//! - Guaranteed delivery, retries, or persistence of undelivered events
//! - Exactly-once semantics
//!
//! Delivery is explicitly fire-and-forget from the caller's point of view.
//!
//! ## Quick Start
//!
//! ```ignore
//! use redirect_analytics::prelude::*;
//!
//! let config = redirect_analytics::config::load_from_env()?;
//! let providers = ProviderRegistry::with_defaults().build(&config.providers);
//! let dispatcher = Dispatcher::from_config(&config);
//!
//! // In the redirect handler, after resolving the target URL:
//! let event = RedirectTrackingContext::new(
//!     "s.example.com".to_string(),
//!     "abc123".to_string(),
//!     Some("192.168.1.1".to_string()),
//!     Some("Mozilla/5.0"),
//!     Some("https://google.com"),
//! )
//! .into_event();
//!
//! dispatcher.dispatch(&event, &providers, DispatchOptions::default()).await;
//! ```
//!
//! Services that must not await dispatch inline send events to the background
//! worker instead (see [`domain::dispatch_worker`]).
//!
//! ## Configuration
//!
//! Runtime settings are loaded from environment variables via
//! [`config::AnalyticsConfig`]. See the [`config`] module for available
//! options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ProviderError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{DispatchOptions, Dispatcher};
    pub use crate::config::AnalyticsConfig;
    pub use crate::domain::event::{AnalyticsEvent, AttributeValue};
    pub use crate::domain::outcome::{DispatchOutcome, DispatchSummary};
    pub use crate::domain::provider::AnalyticsProvider;
    pub use crate::domain::tracking::RedirectTrackingContext;
    pub use crate::error::ProviderError;
    pub use crate::infrastructure::registry::ProviderRegistry;
}
