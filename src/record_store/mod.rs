//! Record store: the single owner of the user collection and its load status.

pub mod error;
pub mod state;

pub use error::*;
pub use state::*;

use crate::clients::RecordStoreClient;
use crate::directory::DirectoryService;
use crate::framework::StateActor;
use std::sync::Arc;

/// Creates a new record store actor and its client.
///
/// The actor starts empty, not loading and without error. Spawn `actor.run()` before
/// using the client.
pub fn new(
    buffer_size: usize,
    directory: Arc<dyn DirectoryService>,
) -> (StateActor<RecordCollectionState>, RecordStoreClient) {
    let (actor, generic_client) = StateActor::new(buffer_size, RecordCollectionState::default());
    let client = RecordStoreClient::new(generic_client, directory);

    (actor, client)
}
