//! Error types for the record store.

use thiserror::Error;

/// Errors that can occur when talking to the record store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for StoreError {
    fn from(msg: String) -> Self {
        StoreError::ActorCommunicationError(msg)
    }
}
