//! Runtime orchestration and observability setup.
//!
//! - [`DashboardSystem`] - starts the record store, builds controllers, shuts down
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod dashboard;
pub mod tracing;

pub use dashboard::*;
pub use self::tracing::*;
