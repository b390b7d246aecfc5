//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Compact format without the crate/module prefix (`with_target(false)`); levels come
//! from the `RUST_LOG` environment variable.
//!
//! ```bash
//! # Load outcomes and shutdown
//! RUST_LOG=info cargo run
//!
//! # Every dispatched store event, gesture and page correction
//! RUST_LOG=debug cargo run
//!
//! # Only the record store
//! RUST_LOG=user_dashboard::clients=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` / `Shutdown` with the state type
//! - **Store Events**: each `Dispatch` with its event at `debug`
//! - **Directory Calls**: `Loaded size=..`, `Updated id=..`, `Deleted id=..` at `info`;
//!   `Load failed`, `Update failed`, `Delete failed` at `warn`. Update and delete
//!   failures are never shown to the operator, so this is where they surface.
//! - **Gestures**: handled gesture names and page corrections at `debug`
//!
//! **With `RUST_LOG=debug`**:
//!
//! ```text
//! DEBUG load_all: Sending request
//! DEBUG load_all: Dispatch state_type="RecordCollectionState" event=LoadStarted
//! INFO load_all: Loaded size=10
//! DEBUG confirm_delete: Page corrected id=11 remaining=10 before=3 after=2
//! WARN update_one{id=4}: Update failed id=4 error=Directory request failed: ...
//! ```

/// Installs the global subscriber. Later calls are no-ops.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - spans carry the operation name
        .compact() // Compact format shows spans inline (e.g., "update_one{id=4}")
        .try_init();
}
