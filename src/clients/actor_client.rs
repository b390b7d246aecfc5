use crate::framework::{ActorState, FrameworkError, StateClient};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for domain-specific clients to inherit the standard read operations.
///
/// Implementors only say where their inner [`StateClient`] is and how framework
/// errors map to their own error type.
#[async_trait]
pub trait ActorClient<S: ActorState>: Send + Sync {
    /// The domain-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StateClient.
    fn inner(&self) -> &StateClient<S>;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Ask the actor for its state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<S, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// The last committed state.
    fn current(&self) -> S {
        self.inner().current()
    }

    /// Change notifications for the state.
    fn subscribe(&self) -> watch::Receiver<S> {
        self.inner().subscribe()
    }
}
