//! Terminal results of provider delivery attempts.
//!
//! Both types are created fresh per dispatch call and discarded after the
//! summary is logged; nothing here is ever persisted.

/// The terminal result of one provider's delivery attempt within a dispatch.
///
/// Invariant: `timed_out == true` implies `succeeded == false`.
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    /// Provider identifier, as reported by
    /// [`crate::domain::provider::AnalyticsProvider::name`].
    pub provider: String,
    pub succeeded: bool,
    pub duration_ms: u64,
    /// True only when the attempt's deadline, not the provider itself,
    /// caused the failure.
    pub timed_out: bool,
    pub error: Option<String>,
}

impl DispatchOutcome {
    pub(crate) fn success(provider: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            provider: provider.into(),
            succeeded: true,
            duration_ms,
            timed_out: false,
            error: None,
        }
    }

    pub(crate) fn failure(
        provider: impl Into<String>,
        duration_ms: u64,
        error: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            succeeded: false,
            duration_ms,
            timed_out: false,
            error: Some(error.into()),
        }
    }

    pub(crate) fn timeout(provider: impl Into<String>, duration_ms: u64, budget_ms: u64) -> Self {
        Self {
            provider: provider.into(),
            succeeded: false,
            duration_ms,
            timed_out: true,
            error: Some(format!("timed out after {budget_ms}ms")),
        }
    }
}

/// Aggregate result of delivering one event to all configured providers.
///
/// Invariant: `successful + failed == total_providers`.
#[derive(Debug, Clone)]
pub struct DispatchSummary {
    pub total_providers: usize,
    pub successful: usize,
    /// Failed attempts, timeouts included.
    pub failed: usize,
    /// Wall-clock duration of the whole dispatch call.
    pub duration_ms: u64,
    /// The per-provider budget the call ran with.
    pub timeout_ms: u64,
    /// Per-provider outcomes, in dispatch order.
    pub outcomes: Vec<DispatchOutcome>,
}

impl DispatchSummary {
    /// Summary for a dispatch that had no providers to deliver to.
    pub(crate) fn empty(timeout_ms: u64) -> Self {
        Self {
            total_providers: 0,
            successful: 0,
            failed: 0,
            duration_ms: 0,
            timeout_ms,
            outcomes: Vec::new(),
        }
    }
}
