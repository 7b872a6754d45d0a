//! Redirect request context that seeds a `redirect_click` event.

use crate::domain::event::AnalyticsEvent;

/// Event name emitted for every tracked redirect.
pub const REDIRECT_CLICK_EVENT: &str = "redirect_click";

/// An in-memory snapshot of one redirect request for analytics purposes.
///
/// Built by the redirect handler from request data it has already parsed
/// (resolved domain, short code, client headers). This crate never parses
/// HTTP itself; the handler passes denormalized values in.
///
/// # Design
///
/// - All client metadata is optional to handle missing headers gracefully
/// - Cloneable for sending across async boundaries
///
/// # Usage Flow
///
/// 1. Created in the redirect handler with request metadata
/// 2. Converted to an [`AnalyticsEvent`] via [`Self::into_event`]
/// 3. Sent to the dispatch channel (non-blocking)
/// 4. Delivered by [`crate::domain::dispatch_worker::run_dispatch_worker`]
#[derive(Debug, Clone)]
pub struct RedirectTrackingContext {
    pub domain: String,
    pub code: String,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

impl RedirectTrackingContext {
    /// Creates a new tracking context.
    ///
    /// # Arguments
    ///
    /// - `domain` - The domain name serving the short link (e.g., "s.example.com")
    /// - `code` - The short code that was accessed
    /// - `ip` - Optional client IP address
    /// - `user_agent` - Optional User-Agent header
    /// - `referer` - Optional Referer header
    pub fn new(
        domain: String,
        code: String,
        ip: Option<String>,
        user_agent: Option<&str>,
        referer: Option<&str>,
    ) -> Self {
        Self {
            domain,
            code,
            ip,
            user_agent: user_agent.map(|s| s.to_string()),
            referer: referer.map(|s| s.to_string()),
        }
    }

    /// Converts the context into the neutral `redirect_click` event.
    ///
    /// Absent metadata is omitted rather than sent as empty strings, so
    /// providers can distinguish "header missing" from "header empty".
    pub fn into_event(self) -> AnalyticsEvent {
        let mut event = AnalyticsEvent::new(REDIRECT_CLICK_EVENT)
            .with_attribute("domain", self.domain)
            .with_attribute("code", self.code);

        if let Some(ip) = self.ip {
            event = event.with_attribute("ip", ip);
        }
        if let Some(user_agent) = self.user_agent {
            event = event.with_attribute("user_agent", user_agent);
        }
        if let Some(referer) = self.referer {
            event = event.with_attribute("referer", referer);
        }

        event
    }
}
