//! Effective per-provider timeout resolution.

use tracing::warn;

/// Hard-coded fallback when neither an explicit override nor the environment
/// supplies a usable timeout.
pub const DEFAULT_PROVIDER_TIMEOUT_MS: u64 = 2_000;

/// Resolves the effective per-provider timeout in milliseconds.
///
/// Precedence: explicit override, then the environment-configured value,
/// then [`DEFAULT_PROVIDER_TIMEOUT_MS`]. A tier is skipped with a warning
/// when its value is not a positive integer; an invalid timeout is never an
/// error. The result is always `>= 1`.
///
/// The function performs no I/O of its own: the caller reads the environment
/// (once, at configuration time) and passes the raw string in, so the
/// precedence rules are testable in isolation.
pub fn resolve_provider_timeout(override_ms: Option<u64>, env_value: Option<&str>) -> u64 {
    if let Some(ms) = override_ms {
        if ms > 0 {
            return ms;
        }
        warn!(value = ms, "ignoring non-positive provider timeout override");
    }

    if let Some(raw) = env_value {
        match raw.trim().parse::<u64>() {
            Ok(ms) if ms > 0 => return ms,
            _ => warn!(value = raw, "ignoring invalid provider timeout from environment"),
        }
    }

    DEFAULT_PROVIDER_TIMEOUT_MS
}
