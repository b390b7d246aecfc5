//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its channel.
//! Then use [`expect_dispatch`] or [`expect_snapshot`] to assert exactly which
//! requests a client operation sends, answering each one by hand.

use crate::framework::{ActorState, FrameworkError, Response, StateClient, StateRequest};
use tokio::sync::{mpsc, watch};

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// When testing the logic *around* a [`StateClient`] (e.g. which events a record store
/// operation emits, and in which order), there is no need to run a [`StateActor`].
///
/// The returned client sends to a channel the test controls. Every request can be
/// inspected and answered, so success, failure and delays are all deterministic.
/// `initial` is what [`StateClient::current`] reports; it never changes, since no actor
/// publishes.
///
/// [`StateActor`]: crate::framework::StateActor
pub fn create_mock_client<S: ActorState>(
    buffer_size: usize,
    initial: S,
) -> (StateClient<S>, mpsc::Receiver<StateRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_publisher, watcher) = watch::channel(initial);
    (StateClient::new(sender, watcher), receiver)
}

/// Helper to verify that the next message is a Dispatch request
pub async fn expect_dispatch<S: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<S>>,
) -> Option<(S::Event, Response<()>)> {
    match receiver.recv().await {
        Some(StateRequest::Dispatch { event, respond_to }) => Some((event, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<S: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<S>>,
) -> Option<Response<S>> {
    match receiver.recv().await {
        Some(StateRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Answers a Dispatch as an actor would after applying it.
pub fn acknowledge(respond_to: Response<()>) {
    let _ = respond_to.send(Ok(()));
}

/// Answers any request with [`FrameworkError::ActorDropped`] by dropping the responder.
pub fn abandon<T>(respond_to: Response<T>) {
    drop(respond_to);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{ActorClient, RecordStoreClient};
    use crate::directory::mock::MockDirectory;
    use crate::model::{User, UserId};
    use crate::record_store::{RecordCollectionState, StoreEvent};
    use std::sync::Arc;

    fn client_with(
        directory: &MockDirectory,
    ) -> (RecordStoreClient, mpsc::Receiver<StateRequest<RecordCollectionState>>) {
        let (inner, receiver) = create_mock_client(10, RecordCollectionState::default());
        (RecordStoreClient::new(inner, Arc::new(directory.clone())), receiver)
    }

    #[tokio::test]
    async fn test_load_all_emits_started_then_outcome() {
        let directory = MockDirectory::new();
        let users = vec![User::new(1, "John Doe", "john@example.com", "Company A")];
        directory.expect_list().return_ok(users.clone());
        let (client, mut receiver) = client_with(&directory);

        // load_all returns only once the loading phase is acknowledged
        let started = tokio::spawn(async move { client.load_all().await });

        let (event, responder) = expect_dispatch(&mut receiver).await.expect("Expected Dispatch");
        assert_eq!(event, StoreEvent::LoadStarted);
        acknowledge(responder);

        let pending = started.await.unwrap();
        assert_eq!(pending.name(), "load_all");

        let (event, responder) = expect_dispatch(&mut receiver).await.expect("Expected Dispatch");
        assert_eq!(event, StoreEvent::LoadSucceeded(users));
        acknowledge(responder);

        pending.settled().await.unwrap();
        directory.verify();
    }

    #[tokio::test]
    async fn test_load_failure_carries_message_or_fallback() {
        let directory = MockDirectory::new();
        directory.expect_list().return_err("");
        let (client, mut receiver) = client_with(&directory);

        let started = tokio::spawn(async move { client.load_all().await });
        let (_, responder) = expect_dispatch(&mut receiver).await.unwrap();
        acknowledge(responder);
        let pending = started.await.unwrap();
        let (event, responder) = expect_dispatch(&mut receiver).await.unwrap();
        assert_eq!(event, StoreEvent::LoadFailed("Something went wrong".into()));
        acknowledge(responder);

        pending.settled().await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_mutations_dispatch_nothing() {
        let directory = MockDirectory::new();
        directory.expect_update(UserId(1)).return_err("500");
        directory.expect_delete(UserId(2)).return_err("500");
        let (client, mut receiver) = client_with(&directory);

        client
            .update_one(User::new(1, "John", "john@example.com", "A"))
            .settled()
            .await
            .unwrap();
        client.delete_one(UserId(2)).settled().await.unwrap();

        assert!(receiver.try_recv().is_err());
        directory.verify();
    }

    #[tokio::test]
    async fn test_snapshot_through_actor_client_trait() {
        let directory = MockDirectory::new();
        let (client, mut receiver) = client_with(&directory);

        let task = tokio::spawn(async move { client.snapshot().await });

        let responder = expect_snapshot(&mut receiver).await.expect("Expected Snapshot");
        abandon(responder);

        let result = task.await.unwrap();
        assert!(result.is_err());
    }
}
