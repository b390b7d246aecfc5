use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn, Instrument, Span};

use crate::clients::actor_client::ActorClient;
use crate::directory::DirectoryService;
use crate::framework::{FrameworkError, StateClient};
use crate::model::{User, UserId};
use crate::record_store::{RecordCollectionState, StoreError, StoreEvent};

/// A store operation running in the background.
///
/// Dropping it does not cancel the operation. Await [`PendingOperation::settled`] to
/// know the resulting transition has been committed.
#[derive(Debug)]
pub struct PendingOperation {
    name: &'static str,
    handle: JoinHandle<()>,
}

impl PendingOperation {
    fn spawn<F>(name: &'static str, operation: F) -> Self
    where
        F: Future<Output = Result<(), FrameworkError>> + Send + 'static,
    {
        let handle = tokio::spawn(
            async move {
                if let Err(e) = operation.await {
                    warn!(operation = name, error = %e, "Record store unreachable");
                }
            }
            .instrument(Span::current()),
        );
        Self { name, handle }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits until the operation's network call resolved and its outcome was applied.
    pub async fn settled(self) -> Result<(), FrameworkError> {
        let name = self.name;
        self.handle
            .await
            .map_err(|e| FrameworkError::TaskFailed(format!("{name}: {e}")))
    }
}

/// Client for the record store.
///
/// No operation waits on the network. The network call runs in its own task and its
/// completion is dispatched to the store as a [`StoreEvent`].
#[derive(Clone)]
pub struct RecordStoreClient {
    inner: StateClient<RecordCollectionState>,
    directory: Arc<dyn DirectoryService>,
}

impl RecordStoreClient {
    pub fn new(
        inner: StateClient<RecordCollectionState>,
        directory: Arc<dyn DirectoryService>,
    ) -> Self {
        Self { inner, directory }
    }

    /// Replace the whole collection with the directory's list.
    ///
    /// The loading phase is committed before this returns, so a view built right
    /// after shows the loading indicator. Only the network call and its outcome run
    /// in the background. Failure records a message and keeps the previous records;
    /// there is no automatic retry.
    #[instrument(skip(self))]
    pub async fn load_all(&self) -> PendingOperation {
        debug!("Sending request");
        if let Err(e) = self.inner.dispatch(StoreEvent::LoadStarted).await {
            warn!(operation = "load_all", error = %e, "Record store unreachable");
        }

        let inner = self.inner.clone();
        let directory = self.directory.clone();
        PendingOperation::spawn("load_all", async move {
            let event = match directory.list_users().await {
                Ok(users) => {
                    info!(size = users.len(), "Loaded");
                    StoreEvent::LoadSucceeded(users)
                }
                Err(e) => {
                    warn!(error = %e, "Load failed");
                    StoreEvent::LoadFailed(e.user_message())
                }
            };
            inner.dispatch(event).await
        })
    }

    /// Send the full edited record; on success it replaces the stored one by id.
    ///
    /// Failures are only logged: the store keeps the old record.
    #[instrument(skip(self, user), fields(id = %user.id))]
    pub fn update_one(&self, user: User) -> PendingOperation {
        debug!(?user, "update_one called");
        let inner = self.inner.clone();
        let directory = self.directory.clone();
        PendingOperation::spawn("update_one", async move {
            match directory.update_user(&user).await {
                Ok(()) => {
                    info!(id = %user.id, "Updated");
                    inner.dispatch(StoreEvent::UpdateSucceeded(user)).await
                }
                Err(e) => {
                    warn!(id = %user.id, error = %e, "Update failed");
                    Ok(())
                }
            }
        })
    }

    /// Delete by id; on success the record leaves the collection.
    ///
    /// Failures are only logged: the record stays.
    #[instrument(skip(self))]
    pub fn delete_one(&self, id: UserId) -> PendingOperation {
        debug!("Sending request");
        let inner = self.inner.clone();
        let directory = self.directory.clone();
        PendingOperation::spawn("delete_one", async move {
            match directory.delete_user(id).await {
                Ok(()) => {
                    info!(%id, "Deleted");
                    inner.dispatch(StoreEvent::DeleteSucceeded(id)).await
                }
                Err(e) => {
                    warn!(%id, error = %e, "Delete failed");
                    Ok(())
                }
            }
        })
    }
}

#[async_trait]
impl ActorClient<RecordCollectionState> for RecordStoreClient {
    type Error = StoreError;

    fn inner(&self) -> &StateClient<RecordCollectionState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        StoreError::ActorCommunicationError(e.to_string())
    }
}
