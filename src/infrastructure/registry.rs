//! Name-to-factory lookup for building the provider list.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::provider::AnalyticsProvider;
use crate::error::ProviderError;
use crate::infrastructure::providers::{LogProvider, NoopProvider};

type ProviderFactory = Box<dyn Fn() -> Result<Arc<dyn AnalyticsProvider>, ProviderError> + Send + Sync>;

/// Turns a comma-separated provider spec (e.g. `"log,ga4"`) into provider
/// instances.
///
/// The registry is the gate between configuration and the dispatcher: a
/// provider that is unknown, or whose factory reports
/// [`ProviderError::NotConfigured`] (missing API key, endpoint), is skipped
/// here with a warning and never reaches the dispatcher. The dispatcher only
/// ever sees providers that are ready to attempt delivery.
///
/// Host services register their vendor adapters on top of the built-ins:
///
/// ```ignore
/// let mut registry = ProviderRegistry::with_defaults();
/// registry.register("ga4", || Ga4Provider::from_env().map(|p| Arc::new(p) as _));
/// let providers = registry.build(&config.providers);
/// ```
pub struct ProviderRegistry {
    factories: HashMap<String, ProviderFactory>,
}

impl ProviderRegistry {
    /// Creates an empty registry with no factories.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Creates a registry with the built-in providers registered:
    /// `"noop"` and `"log"`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("noop", || Ok(Arc::new(NoopProvider::new()) as _));
        registry.register("log", || Ok(Arc::new(LogProvider::new()) as _));
        registry
    }

    /// Registers a factory under `name`, replacing any previous registration.
    ///
    /// The factory runs once per [`Self::build`] call. It may return
    /// [`ProviderError::NotConfigured`] to opt out when its settings are
    /// absent.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Result<Arc<dyn AnalyticsProvider>, ProviderError> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Builds provider instances from a comma-separated spec.
    ///
    /// Names are trimmed; empty segments are ignored, so `""`, `"log,"` and
    /// `" log , noop "` all behave as expected. Unknown and not-configured
    /// names produce a warning, never an error: analytics setup must not be
    /// able to break the host service.
    pub fn build(&self, spec: &str) -> Vec<Arc<dyn AnalyticsProvider>> {
        let mut providers: Vec<Arc<dyn AnalyticsProvider>> = Vec::new();

        for name in spec.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match self.factories.get(name) {
                Some(factory) => match factory() {
                    Ok(provider) => providers.push(provider),
                    Err(e) => {
                        warn!(provider = name, error = %e, "skipping analytics provider");
                    }
                },
                None => {
                    warn!(provider = name, "unknown analytics provider");
                }
            }
        }

        info!(count = providers.len(), "analytics providers initialized");

        providers
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
