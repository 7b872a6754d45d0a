//! Background worker draining the analytics event queue.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;

use crate::application::services::{DispatchOptions, Dispatcher};
use crate::domain::event::AnalyticsEvent;
use crate::domain::provider::AnalyticsProvider;

/// Drains events from the bounded channel and dispatches each one.
///
/// This is the fire-and-forget seam for callers that must not await dispatch
/// inline: the redirect handler does a non-blocking `try_send` on the channel
/// and returns its response; delivery happens here. If the queue is full the
/// event is dropped at the send site.
///
/// Runs until every sender half of the channel is dropped.
pub async fn run_dispatch_worker(
    mut rx: mpsc::Receiver<AnalyticsEvent>,
    dispatcher: Dispatcher,
    providers: Vec<Arc<dyn AnalyticsProvider>>,
) {
    while let Some(event) = rx.recv().await {
        dispatcher
            .dispatch(&event, &providers, DispatchOptions::default())
            .await;
    }

    info!("analytics dispatch worker stopped");
}
