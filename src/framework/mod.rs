//! Generic actor framework for owned, event-driven state.
//!
//! This module provides the building blocks the record store is made of.
//!
//! # Main Components
//!
//! - [`ActorState`] - Trait that state types implement to be driven by events
//! - [`StateActor`] - Generic actor that owns the state and applies events sequentially
//! - [`StateClient`] - Type-safe, cloneable handle for dispatching events and reading snapshots
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
