//! Analytics configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup by the host service and validated
//! before any events are dispatched.
//!
//! ## Optional Variables
//!
//! - `ANALYTICS_PROVIDERS` - Comma-separated provider names (default: empty,
//!   analytics disabled)
//! - `ANALYTICS_PROVIDER_TIMEOUT_MS` - Per-provider delivery timeout in
//!   milliseconds (default: 2000)
//! - `ANALYTICS_QUEUE_CAPACITY` - Event buffer size for the background
//!   dispatch worker (default: 10000, min: 100)
//!
//! An unset or empty `ANALYTICS_PROVIDERS` is not an error: the dispatcher
//! logs a "no providers configured" record per event and returns immediately.

use anyhow::Result;
use std::env;

/// Environment variable naming the enabled providers.
pub const PROVIDERS_ENV: &str = "ANALYTICS_PROVIDERS";

/// Environment variable holding the per-provider timeout in milliseconds.
pub const PROVIDER_TIMEOUT_ENV: &str = "ANALYTICS_PROVIDER_TIMEOUT_MS";

/// Environment variable sizing the dispatch worker queue.
pub const QUEUE_CAPACITY_ENV: &str = "ANALYTICS_QUEUE_CAPACITY";

/// Analytics subsystem configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    /// Comma-separated provider spec, e.g. `"log,noop"`.
    /// Resolved to provider instances by
    /// [`crate::infrastructure::registry::ProviderRegistry::build`].
    pub providers: String,
    /// Raw per-provider timeout value from the environment, if set.
    ///
    /// Kept as a string on purpose: interpretation (and the warning for
    /// invalid values) belongs to
    /// [`crate::application::services::timeout::resolve_provider_timeout`],
    /// which runs once per dispatch.
    pub provider_timeout_ms: Option<String>,
    /// Event queue capacity for the background dispatch worker.
    pub queue_capacity: usize,
}

impl AnalyticsConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let providers = env::var(PROVIDERS_ENV).unwrap_or_default();

        let provider_timeout_ms = env::var(PROVIDER_TIMEOUT_ENV).ok();

        let queue_capacity = env::var(QUEUE_CAPACITY_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        Self {
            providers,
            provider_timeout_ms,
            queue_capacity,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `queue_capacity` is outside `100..=1_000_000`.
    pub fn validate(&self) -> Result<()> {
        if self.queue_capacity < 100 {
            anyhow::bail!(
                "{} must be at least 100, got {}",
                QUEUE_CAPACITY_ENV,
                self.queue_capacity
            );
        }

        if self.queue_capacity > 1_000_000 {
            anyhow::bail!(
                "{} is too large (max: 1000000), got {}",
                QUEUE_CAPACITY_ENV,
                self.queue_capacity
            );
        }

        Ok(())
    }

    /// Returns whether any providers are configured.
    pub fn is_enabled(&self) -> bool {
        !self.providers.trim().is_empty()
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Analytics configuration loaded:");
        if self.is_enabled() {
            tracing::info!("  Providers: {}", self.providers);
        } else {
            tracing::info!("  Providers: none (analytics disabled)");
        }
        tracing::info!(
            "  Provider timeout: {}",
            self.provider_timeout_ms.as_deref().unwrap_or("default")
        );
        tracing::info!("  Queue capacity: {}", self.queue_capacity);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in the host service's `main`).
pub fn load_from_env() -> Result<AnalyticsConfig> {
    let config = AnalyticsConfig::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_validation() {
        let mut config = AnalyticsConfig {
            providers: "log,noop".to_string(),
            provider_timeout_ms: None,
            queue_capacity: 10_000,
        };

        assert!(config.validate().is_ok());

        config.queue_capacity = 50;
        assert!(config.validate().is_err());

        config.queue_capacity = 2_000_000;
        assert!(config.validate().is_err());

        config.queue_capacity = 100;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_enabled() {
        let mut config = AnalyticsConfig {
            providers: String::new(),
            provider_timeout_ms: None,
            queue_capacity: 10_000,
        };

        assert!(!config.is_enabled());

        config.providers = "  ".to_string();
        assert!(!config.is_enabled());

        config.providers = "log".to_string();
        assert!(config.is_enabled());
    }

    #[test]
    #[serial]
    fn test_from_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var(PROVIDERS_ENV, "log,noop");
            env::set_var(PROVIDER_TIMEOUT_ENV, "750");
            env::set_var(QUEUE_CAPACITY_ENV, "500");
        }

        let config = AnalyticsConfig::from_env();

        assert_eq!(config.providers, "log,noop");
        assert_eq!(config.provider_timeout_ms.as_deref(), Some("750"));
        assert_eq!(config.queue_capacity, 500);

        // Cleanup
        unsafe {
            env::remove_var(PROVIDERS_ENV);
            env::remove_var(PROVIDER_TIMEOUT_ENV);
            env::remove_var(QUEUE_CAPACITY_ENV);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var(PROVIDERS_ENV);
            env::remove_var(PROVIDER_TIMEOUT_ENV);
            env::remove_var(QUEUE_CAPACITY_ENV);
        }

        let config = AnalyticsConfig::from_env();

        assert!(config.providers.is_empty());
        assert!(config.provider_timeout_ms.is_none());
        assert_eq!(config.queue_capacity, 10_000);
    }

    #[test]
    #[serial]
    fn test_invalid_queue_capacity_falls_back_to_default() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var(QUEUE_CAPACITY_ENV, "not-a-number");
        }

        let config = AnalyticsConfig::from_env();
        assert_eq!(config.queue_capacity, 10_000);

        // Cleanup
        unsafe {
            env::remove_var(QUEUE_CAPACITY_ENV);
        }
    }
}
