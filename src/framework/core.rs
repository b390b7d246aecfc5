//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the dashboard's state container.
//!
//! ## Key Types
//!
//! - [`ActorState`]: The trait a piece of owned state implements to be driven by events.
//! - [`StateActor`]: The generic actor that owns the state and applies events in order.
//! - [`StateClient`]: The cloneable handle used to dispatch events and read snapshots.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, ActorDropped).

use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any state owned by a [`StateActor`] must implement.
///
/// # Architecture Note
/// The state never mutates itself spontaneously. Every change is described by an
/// [`ActorState::Event`] value and applied by [`ActorState::apply`], which makes each
/// transition a deterministic function of (previous state, event). The actor is the
/// only place `apply` is ever called, so the state has exactly one owner.
///
/// The `Clone` bound exists because every committed state is published as a snapshot
/// to readers (views, controllers, tests).
pub trait ActorState: Clone + Debug + Send + Sync + 'static {
    /// The transition messages this state understands.
    type Event: Send + Sync + Debug;

    /// Apply one event to the state.
    fn apply(&mut self, event: Self::Event);
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Actor task failed: {0}")]
    TaskFailed(String),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// - **Dispatch**: apply one event, then acknowledge once the new state is published.
/// - **Snapshot**: return a copy of the state as the actor currently holds it.
#[derive(Debug)]
pub enum StateRequest<S: ActorState> {
    Dispatch {
        event: S::Event,
        respond_to: Response<()>,
    },
    Snapshot {
        respond_to: Response<S>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns one piece of state.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state and the receiver
/// end of the channel, and processes messages *sequentially*. No `Mutex` or `RwLock`
/// guards the state: exclusive ownership inside the task is what keeps it consistent.
///
/// After every applied event the new state is published on a `watch` channel, so
/// readers always see the last committed state without a round trip.
pub struct StateActor<S: ActorState> {
    receiver: mpsc::Receiver<StateRequest<S>>,
    state: S,
    publisher: watch::Sender<S>,
}

impl<S: ActorState> StateActor<S> {
    /// Creates a new `StateActor` seeded with `initial` and its associated [`StateClient`].
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full, callers
    /// of the client wait until there is space.
    pub fn new(buffer_size: usize, initial: S) -> (Self, StateClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, watcher) = watch::channel(initial.clone());
        let actor = Self {
            receiver,
            state: initial,
            publisher,
        };
        let client = StateClient::new(sender, watcher);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "RecordCollectionState")
        let state_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StateRequest::Dispatch { event, respond_to } => {
                    debug!(state_type, ?event, "Dispatch");
                    self.state.apply(event);
                    self.publisher.send_replace(self.state.clone());
                    let _ = respond_to.send(Ok(()));
                }
                StateRequest::Snapshot { respond_to } => {
                    debug!(state_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
            }
        }

        info!(state_type, "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`StateActor`].
///
/// Cheap to clone: it holds only a sender and a watch receiver.
#[derive(Clone)]
pub struct StateClient<S: ActorState> {
    sender: mpsc::Sender<StateRequest<S>>,
    watcher: watch::Receiver<S>,
}

impl<S: ActorState> StateClient<S> {
    pub fn new(sender: mpsc::Sender<StateRequest<S>>, watcher: watch::Receiver<S>) -> Self {
        Self { sender, watcher }
    }

    /// Sends an event and waits until the actor has applied and published it.
    pub async fn dispatch(&self, event: S::Event) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Dispatch { event, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Asks the actor for its state.
    pub async fn snapshot(&self) -> Result<S, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// The last published state. Never waits on the actor.
    pub fn current(&self) -> S {
        self.watcher.borrow().clone()
    }

    /// A fresh receiver that is notified each time the actor publishes a new state.
    ///
    /// The state current at subscription time counts as seen.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        let mut receiver = self.watcher.clone();
        receiver.borrow_and_update();
        receiver
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Tally {
        entries: Vec<String>,
        closed: bool,
    }

    #[derive(Debug)]
    enum TallyEvent {
        Add(String),
        Close,
    }

    impl ActorState for Tally {
        type Event = TallyEvent;

        fn apply(&mut self, event: TallyEvent) {
            match event {
                TallyEvent::Add(entry) if !self.closed => self.entries.push(entry),
                TallyEvent::Add(_) => {}
                TallyEvent::Close => self.closed = true,
            }
        }
    }

    #[tokio::test]
    async fn test_state_actor_applies_events_in_order() {
        let (actor, client) = StateActor::new(10, Tally::default());
        tokio::spawn(actor.run());

        client.dispatch(TallyEvent::Add("a".into())).await.unwrap();
        client.dispatch(TallyEvent::Add("b".into())).await.unwrap();
        client.dispatch(TallyEvent::Close).await.unwrap();
        client.dispatch(TallyEvent::Add("c".into())).await.unwrap();

        let state = client.snapshot().await.unwrap();
        assert_eq!(state.entries, vec!["a".to_string(), "b".to_string()]);
        assert!(state.closed);

        // The published snapshot matches what the actor holds
        assert_eq!(client.current(), state);
    }

    #[tokio::test]
    async fn test_subscribers_see_every_commit() {
        let (actor, client) = StateActor::new(10, Tally::default());
        tokio::spawn(actor.run());

        let mut changes = client.subscribe();
        client.dispatch(TallyEvent::Add("x".into())).await.unwrap();

        changes.changed().await.unwrap();
        assert_eq!(changes.borrow().entries, vec!["x".to_string()]);
    }

    #[tokio::test]
    async fn test_late_subscriber_starts_from_current_state() {
        let (actor, client) = StateActor::new(10, Tally::default());
        tokio::spawn(actor.run());

        client.dispatch(TallyEvent::Add("x".into())).await.unwrap();

        let mut changes = client.subscribe();
        assert!(!changes.has_changed().unwrap());
        assert_eq!(changes.borrow().entries, vec!["x".to_string()]);

        client.dispatch(TallyEvent::Close).await.unwrap();
        assert!(changes.has_changed().unwrap());
        changes.changed().await.unwrap();
        assert!(changes.borrow().closed);
    }

    #[tokio::test]
    async fn test_closed_actor_reports_error() {
        let (actor, client) = StateActor::<Tally>::new(10, Tally::default());
        drop(actor);

        let result = client.dispatch(TallyEvent::Close).await;
        assert_eq!(result, Err(FrameworkError::ActorClosed));
        // The last published value is still readable
        assert_eq!(client.current(), Tally::default());
    }
}
