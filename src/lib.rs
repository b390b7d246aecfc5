//! # User Dashboard
//!
//! > **The core of a user-records management dashboard.**
//!
//! A remote directory service holds user records. This crate loads them into a single
//! state-owning actor, projects them into a searchable, paginated table, and turns
//! operator gestures (search, page, edit, delete) into store transitions.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One owner, many readers
//!
//! The record collection lives inside one Tokio task. Everything else talks to it
//! through messages:
//! - **Writes** are store events, applied one at a time by a pure reducer.
//! - **Reads** are snapshots published on a `watch` channel after every event.
//!
//! Derived views never cache the collection, so a projection always reflects the
//! last committed state.
//!
//! ### Fire-and-forget operations
//!
//! Load, update and delete return a [`PendingOperation`](clients::PendingOperation)
//! without waiting on the network; load first commits its loading phase. The
//! network call runs in its own task and dispatches its outcome when it resolves. Tests await [`settled`](clients::PendingOperation::settled);
//! the dashboard itself never has to.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each layer has its own `thiserror` enum: [`FrameworkError`](framework::FrameworkError)
//! for actor plumbing, [`DirectoryError`](directory::DirectoryError) for the remote
//! service, [`ConfigError`](config::ConfigError) for startup. Only load failures reach
//! the operator, as a message; update and delete failures are logged.
//!
//! ### 2. A Trait at the Network Seam
//! The store only knows [`DirectoryService`](directory::DirectoryService). Production
//! wires in [`HttpDirectory`](directory::HttpDirectory); tests use
//! [`MockDirectory`](directory::mock::MockDirectory) with scripted responses.
//!
//! ### 3. Observability
//! `tracing` spans wrap every store operation and gesture. See the
//! [`lifecycle::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! A generic state actor: one reducer, one request loop, one snapshot channel.
//! - **Key items**: [`ActorState`](framework::ActorState), [`StateActor`](framework::StateActor).
//!
//! ### 2. The Store ([`record_store`], [`clients`])
//! The user collection and its load status, plus the client that runs directory calls.
//! - **Key items**: [`RecordCollectionState`](record_store::RecordCollectionState),
//!   [`RecordStoreClient`](clients::RecordStoreClient).
//!
//! ### 3. The Surface ([`view`], [`controller`])
//! Filtering, pagination and the rendered table; navigation state and gesture handling.
//! - **Key items**: [`DashboardView`](view::DashboardView),
//!   [`InteractionController`](controller::InteractionController).
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! Spins up the store for one session and shuts it down.
//! - **Key items**: [`DashboardSystem`](lifecycle::DashboardSystem),
//!   [`DashboardConfig`](config::DashboardConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Load from the public demo service and print the first two pages
//! RUST_LOG=info cargo run
//!
//! # Point at another service
//! DASHBOARD_BASE_URL=http://localhost:3000 cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod controller;
pub mod directory;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod record_store;
pub mod view;
