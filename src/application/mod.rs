//! Application layer services implementing the dispatch logic.
//!
//! This layer orchestrates event delivery: it consumes the provider
//! capability trait defined by the domain layer and provides the one entry
//! point the host service calls per event.
//!
//! # Available Services
//!
//! - [`services::dispatch_service::Dispatcher`] - Concurrent fan-out with
//!   per-provider failure isolation
//! - [`services::timeout`] - Effective timeout resolution

pub mod services;
