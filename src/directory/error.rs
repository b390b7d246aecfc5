//! Error types for the directory service.

use thiserror::Error;

/// Shown when a load fails without saying why.
pub const GENERIC_FAILURE: &str = "Something went wrong";

/// Errors that can occur while talking to the directory service.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The configured base URL cannot have paths appended to it.
    #[error("Invalid directory base URL: {0}")]
    InvalidBaseUrl(String),

    /// Transport failure, non-success status, or an undecodable body.
    #[error("Directory request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A failure reported by the service in its own words.
    #[error("{0}")]
    Service(String),
}

impl DirectoryError {
    /// Human-readable message for the page-level error indicator.
    ///
    /// Falls back to [`GENERIC_FAILURE`] when the error carries no text.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            message
        }
    }
}
