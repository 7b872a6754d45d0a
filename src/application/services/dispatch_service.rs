//! Concurrent fan-out of one analytics event to all configured providers.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, error, info};

use crate::application::services::timeout::resolve_provider_timeout;
use crate::config::AnalyticsConfig;
use crate::domain::event::AnalyticsEvent;
use crate::domain::outcome::{DispatchOutcome, DispatchSummary};
use crate::domain::provider::AnalyticsProvider;

/// Per-call options for [`Dispatcher::dispatch`].
#[derive(Debug, Clone, Default)]
pub struct DispatchOptions {
    /// Explicit per-provider timeout in milliseconds. Takes precedence over
    /// the environment-configured value. Must be positive; zero is ignored
    /// with a warning.
    pub provider_timeout_ms: Option<u64>,
}

/// Delivers one event to a set of providers concurrently, under a strict
/// per-provider time budget, with per-provider failure isolation.
///
/// The dispatcher holds no state across calls beyond the environment-tier
/// timeout captured from [`AnalyticsConfig`] at construction. Providers are
/// borrowed per call and never retained.
///
/// # Contract
///
/// [`Dispatcher::dispatch`] always completes and has no error path. Provider
/// failures, timeouts, and panicking adapters are converted into failed
/// outcomes; the caller (the redirect response path) has nothing to handle.
///
/// Total dispatch latency is bounded by the single per-provider timeout plus
/// scheduling overhead, regardless of provider count: every attempt runs in
/// its own task and races its own deadline.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    /// Raw environment-tier timeout value, as loaded by [`AnalyticsConfig`].
    /// Interpreted (and warned about, if invalid) at dispatch time.
    env_timeout_ms: Option<String>,
}

impl Dispatcher {
    /// Creates a dispatcher with no environment-tier timeout.
    ///
    /// Without a per-call override, dispatch runs with
    /// [`crate::application::services::timeout::DEFAULT_PROVIDER_TIMEOUT_MS`].
    pub fn new() -> Self {
        Self {
            env_timeout_ms: None,
        }
    }

    /// Creates a dispatcher carrying the environment-configured timeout.
    pub fn from_config(config: &AnalyticsConfig) -> Self {
        Self {
            env_timeout_ms: config.provider_timeout_ms.clone(),
        }
    }

    /// Delivers `event` to every provider concurrently and returns the
    /// aggregate summary.
    ///
    /// An empty provider list is not an error: it logs a single
    /// "no analytics providers configured" record and returns a zeroed
    /// summary immediately.
    pub async fn dispatch(
        &self,
        event: &AnalyticsEvent,
        providers: &[Arc<dyn AnalyticsProvider>],
        options: DispatchOptions,
    ) -> DispatchSummary {
        let timeout_ms = resolve_provider_timeout(
            options.provider_timeout_ms,
            self.env_timeout_ms.as_deref(),
        );

        if providers.is_empty() {
            info!(
                event = %event.name,
                attributes = event.attribute_count(),
                timeout_ms,
                "no analytics providers configured"
            );
            return DispatchSummary::empty(timeout_ms);
        }

        let started = Instant::now();

        let mut attempts: Vec<(String, JoinHandle<DispatchOutcome>)> =
            Vec::with_capacity(providers.len());

        for (index, provider) in providers.iter().enumerate() {
            let name = provider.name().to_string();
            debug!(
                provider = %name,
                event = %event.name,
                attributes = event.attribute_count(),
                index,
                timeout_ms,
                "dispatching to analytics provider"
            );

            let provider = Arc::clone(provider);
            let event = event.clone();
            let handle =
                tokio::spawn(async move { attempt_delivery(provider, &event, timeout_ms).await });
            attempts.push((name, handle));
        }

        // Join in dispatch order. Attempts run concurrently, so the wait is
        // bounded by the slowest single attempt, and every attempt is itself
        // bounded by the timeout race.
        let mut outcomes = Vec::with_capacity(attempts.len());
        for (name, handle) in attempts {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                // A panicking adapter is a failed delivery, nothing more.
                Err(join_err) => {
                    error!(
                        provider = %name,
                        timed_out = false,
                        error = %join_err,
                        "provider dispatch failed"
                    );
                    DispatchOutcome::failure(name, 0, join_err.to_string())
                }
            };
            outcomes.push(outcome);
        }

        let successful = outcomes.iter().filter(|o| o.succeeded).count();
        let summary = DispatchSummary {
            total_providers: outcomes.len(),
            successful,
            failed: outcomes.len() - successful,
            duration_ms: started.elapsed().as_millis() as u64,
            timeout_ms,
            outcomes,
        };

        info!(
            event = %event.name,
            total = summary.total_providers,
            successful = summary.successful,
            failed = summary.failed,
            duration_ms = summary.duration_ms,
            timeout_ms = summary.timeout_ms,
            "analytics dispatch complete"
        );

        summary
    }
}

/// Races one provider's `send` against the per-provider deadline.
///
/// When the deadline fires, the `send` future is dropped with the race: a
/// late result cannot reach the summary and the timer is released either way.
async fn attempt_delivery(
    provider: Arc<dyn AnalyticsProvider>,
    event: &AnalyticsEvent,
    timeout_ms: u64,
) -> DispatchOutcome {
    let name = provider.name().to_string();
    let started = Instant::now();

    match tokio::time::timeout(Duration::from_millis(timeout_ms), provider.send(event)).await {
        Ok(Ok(())) => {
            let elapsed = started.elapsed().as_millis() as u64;
            info!(
                provider = %name,
                duration_ms = elapsed,
                "provider dispatch successful"
            );
            DispatchOutcome::success(name, elapsed)
        }
        Ok(Err(e)) => {
            let elapsed = started.elapsed().as_millis() as u64;
            error!(
                provider = %name,
                duration_ms = elapsed,
                timed_out = false,
                error = %e,
                "provider dispatch failed"
            );
            DispatchOutcome::failure(name, elapsed, e.to_string())
        }
        Err(_) => {
            let elapsed = started.elapsed().as_millis() as u64;
            let outcome = DispatchOutcome::timeout(name, elapsed, timeout_ms);
            error!(
                provider = %outcome.provider,
                duration_ms = elapsed,
                timed_out = true,
                error = outcome.error.as_deref().unwrap_or_default(),
                "provider dispatch failed"
            );
            outcome
        }
    }
}
