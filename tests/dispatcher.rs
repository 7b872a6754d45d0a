//! Integration tests for the dispatch service.
//!
//! Timing-sensitive cases run on the paused tokio clock, so deadlines are
//! virtual and deterministic: a "hanging" provider really never resolves,
//! and elapsed durations are exact.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serial_test::serial;

use redirect_analytics::config::{self, AnalyticsConfig, PROVIDER_TIMEOUT_ENV};
use redirect_analytics::prelude::*;

struct InstantProvider {
    name: &'static str,
}

#[async_trait]
impl AnalyticsProvider for InstantProvider {
    fn name(&self) -> &str {
        self.name
    }

    async fn send(&self, _event: &AnalyticsEvent) -> Result<(), ProviderError> {
        Ok(())
    }
}

struct SlowProvider {
    name: &'static str,
    delay: Duration,
    delivered: Arc<AtomicUsize>,
}

#[async_trait]
impl AnalyticsProvider for SlowProvider {
    fn name(&self) -> &str {
        self.name
    }

    async fn send(&self, _event: &AnalyticsEvent) -> Result<(), ProviderError> {
        tokio::time::sleep(self.delay).await;
        self.delivered.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct HangingProvider;

#[async_trait]
impl AnalyticsProvider for HangingProvider {
    fn name(&self) -> &str {
        "hanging"
    }

    async fn send(&self, _event: &AnalyticsEvent) -> Result<(), ProviderError> {
        std::future::pending().await
    }
}

struct RejectingProvider {
    name: &'static str,
    message: &'static str,
}

#[async_trait]
impl AnalyticsProvider for RejectingProvider {
    fn name(&self) -> &str {
        self.name
    }

    async fn send(&self, _event: &AnalyticsEvent) -> Result<(), ProviderError> {
        Err(ProviderError::Transport(self.message.to_string()))
    }
}

fn click_event() -> AnalyticsEvent {
    RedirectTrackingContext::new(
        "s.example.com".to_string(),
        "abc123".to_string(),
        Some("192.168.1.1".to_string()),
        Some("Mozilla/5.0"),
        Some("https://google.com"),
    )
    .into_event()
}

#[tokio::test(start_paused = true)]
async fn zero_providers_returns_immediately() {
    let dispatcher = Dispatcher::new();
    let started = tokio::time::Instant::now();

    let summary = dispatcher
        .dispatch(&click_event(), &[], DispatchOptions::default())
        .await;

    assert_eq!(started.elapsed(), Duration::ZERO);
    assert_eq!(summary.total_providers, 0);
    assert_eq!(summary.successful, 0);
    assert_eq!(summary.failed, 0);
    assert!(summary.outcomes.is_empty());
}

#[tokio::test(start_paused = true)]
async fn slow_provider_succeeds_within_budget() {
    let delivered = Arc::new(AtomicUsize::new(0));
    let providers: Vec<Arc<dyn AnalyticsProvider>> = vec![Arc::new(SlowProvider {
        name: "ga4",
        delay: Duration::from_millis(50),
        delivered: delivered.clone(),
    })];

    let summary = Dispatcher::new()
        .dispatch(
            &click_event(),
            &providers,
            DispatchOptions {
                provider_timeout_ms: Some(2_000),
            },
        )
        .await;

    assert_eq!(summary.successful, 1);
    assert_eq!(summary.failed, 0);
    assert_eq!(delivered.load(Ordering::SeqCst), 1);
    assert!(summary.duration_ms >= 50 && summary.duration_ms < 2_000);
}

#[tokio::test(start_paused = true)]
async fn hanging_provider_times_out_without_delaying_others() {
    let providers: Vec<Arc<dyn AnalyticsProvider>> = vec![
        Arc::new(InstantProvider { name: "ga4" }),
        Arc::new(HangingProvider),
    ];

    let started = tokio::time::Instant::now();
    let summary = Dispatcher::new()
        .dispatch(
            &click_event(),
            &providers,
            DispatchOptions {
                provider_timeout_ms: Some(100),
            },
        )
        .await;

    assert!(started.elapsed() <= Duration::from_millis(150));
    assert_eq!(summary.total_providers, 2);
    assert_eq!(summary.successful, 1);
    assert_eq!(summary.failed, 1);

    let hanging = &summary.outcomes[1];
    assert_eq!(hanging.provider, "hanging");
    assert!(hanging.timed_out);
    assert!(!hanging.succeeded);

    let instant = &summary.outcomes[0];
    assert_eq!(instant.provider, "ga4");
    assert!(instant.succeeded);
}

#[tokio::test(start_paused = true)]
async fn rejections_are_reported_with_distinct_messages() {
    let providers: Vec<Arc<dyn AnalyticsProvider>> = vec![
        Arc::new(RejectingProvider {
            name: "ga4",
            message: "http 503",
        }),
        Arc::new(RejectingProvider {
            name: "mixpanel",
            message: "invalid token",
        }),
        Arc::new(RejectingProvider {
            name: "amplitude",
            message: "connection reset",
        }),
    ];

    let started = tokio::time::Instant::now();
    let summary = Dispatcher::new()
        .dispatch(
            &click_event(),
            &providers,
            DispatchOptions {
                provider_timeout_ms: Some(150),
            },
        )
        .await;

    // Bounded by provider latency, not the timeout: rejections are instant.
    assert!(started.elapsed() < Duration::from_millis(150));
    assert_eq!(summary.successful, 0);
    assert_eq!(summary.failed, 3);

    let messages: Vec<&str> = summary
        .outcomes
        .iter()
        .map(|o| o.error.as_deref().unwrap())
        .collect();
    assert!(messages[0].contains("http 503"));
    assert!(messages[1].contains("invalid token"));
    assert!(messages[2].contains("connection reset"));
    for outcome in &summary.outcomes {
        assert!(!outcome.timed_out);
    }
}

#[tokio::test(start_paused = true)]
async fn timed_out_provider_late_result_is_discarded() {
    let delivered = Arc::new(AtomicUsize::new(0));
    let providers: Vec<Arc<dyn AnalyticsProvider>> = vec![Arc::new(SlowProvider {
        name: "ga4",
        delay: Duration::from_millis(200),
        delivered: delivered.clone(),
    })];

    let summary = Dispatcher::new()
        .dispatch(
            &click_event(),
            &providers,
            DispatchOptions {
                provider_timeout_ms: Some(100),
            },
        )
        .await;

    assert_eq!(summary.failed, 1);
    assert!(summary.outcomes[0].timed_out);

    // The send future was dropped at the deadline; its delivery never lands,
    // not even after the original delay has long passed.
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(delivered.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn one_bad_provider_does_not_corrupt_the_rest() {
    let delivered = Arc::new(AtomicUsize::new(0));
    let providers: Vec<Arc<dyn AnalyticsProvider>> = vec![
        Arc::new(SlowProvider {
            name: "ga4",
            delay: Duration::from_millis(10),
            delivered: delivered.clone(),
        }),
        Arc::new(HangingProvider),
        Arc::new(SlowProvider {
            name: "mixpanel",
            delay: Duration::from_millis(20),
            delivered: delivered.clone(),
        }),
    ];

    let summary = Dispatcher::new()
        .dispatch(
            &click_event(),
            &providers,
            DispatchOptions {
                provider_timeout_ms: Some(100),
            },
        )
        .await;

    assert_eq!(summary.total_providers, 3);
    assert_eq!(summary.successful, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(delivered.load(Ordering::SeqCst), 2);
    assert_eq!(
        summary.successful + summary.failed,
        summary.total_providers
    );
}

#[tokio::test]
async fn invalid_config_timeout_falls_back_to_default() {
    let config = AnalyticsConfig {
        providers: String::new(),
        provider_timeout_ms: Some("not-a-number".to_string()),
        queue_capacity: 10_000,
    };
    let dispatcher = Dispatcher::from_config(&config);

    let summary = dispatcher
        .dispatch(&click_event(), &[], DispatchOptions::default())
        .await;

    assert_eq!(summary.timeout_ms, 2_000);
}

#[tokio::test]
#[serial]
async fn environment_timeout_reaches_the_dispatcher() {
    // SAFETY: Tests are run serially due to #[serial], so no concurrent access
    unsafe {
        std::env::set_var(PROVIDER_TIMEOUT_ENV, "350");
    }

    let config = config::load_from_env().unwrap();
    let dispatcher = Dispatcher::from_config(&config);

    let summary = dispatcher
        .dispatch(&click_event(), &[], DispatchOptions::default())
        .await;

    assert_eq!(summary.timeout_ms, 350);

    // Explicit option still wins over the environment.
    let summary = dispatcher
        .dispatch(
            &click_event(),
            &[],
            DispatchOptions {
                provider_timeout_ms: Some(75),
            },
        )
        .await;

    assert_eq!(summary.timeout_ms, 75);

    // Cleanup
    unsafe {
        std::env::remove_var(PROVIDER_TIMEOUT_ENV);
    }
}
