//! The remote directory service the dashboard reads from and writes to.
//!
//! [`DirectoryService`] is the seam: the record store only ever talks to the trait,
//! so tests substitute [`mock::MockDirectory`] for the real [`HttpDirectory`].

pub mod error;
pub mod http;
pub mod mock;

pub use error::*;
pub use http::*;

use crate::model::{User, UserId};
use async_trait::async_trait;

/// List, update and delete operations over user records keyed by id.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Fetch every record, in the order the service returns them.
    async fn list_users(&self) -> Result<Vec<User>, DirectoryError>;

    /// Replace the record stored under `user.id` with `user`.
    async fn update_user(&self, user: &User) -> Result<(), DirectoryError>;

    /// Remove the record stored under `id`.
    async fn delete_user(&self, id: UserId) -> Result<(), DirectoryError>;
}
