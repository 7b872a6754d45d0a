use thiserror::Error;

/// Failure reported by a provider adapter for a single delivery attempt.
///
/// These errors never cross the dispatch boundary: the dispatcher converts
/// them into failed outcomes and the caller has no error path to handle.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The event never reached the vendor (connection refused, DNS, TLS).
    #[error("transport error: {0}")]
    Transport(String),

    /// The vendor received the event and refused it.
    #[error("rejected by vendor: {0}")]
    Rejected(String),

    /// The adapter is missing settings it needs to operate, such as an API
    /// key or endpoint URL. Returned by provider factories; the registry
    /// filters such providers out before they reach the dispatcher.
    #[error("provider not configured: {0}")]
    NotConfigured(String),
}
