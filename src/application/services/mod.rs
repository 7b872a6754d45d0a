//! Dispatch services for the application layer.

pub mod dispatch_service;
pub mod timeout;

pub use dispatch_service::{DispatchOptions, Dispatcher};
