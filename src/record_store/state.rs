//! The record collection and the transitions that change it.

use std::collections::HashSet;
use tracing::warn;

use crate::framework::ActorState;
use crate::model::{User, UserId};

/// Canonical in-memory list of user records plus load status.
///
/// Order is arrival order from the directory service. Ids are unique at all times.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordCollectionState {
    pub users: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
}

/// What the dashboard should show instead of, or as, the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionStatus<'a> {
    Loading,
    Failed(&'a str),
    Ready,
}

impl RecordCollectionState {
    /// A settled collection holding `users`, e.g. to seed a store in tests.
    pub fn with_users(users: Vec<User>) -> Self {
        let mut state = Self::default();
        state.apply(StoreEvent::LoadSucceeded(users));
        state
    }

    /// Loading wins over a stale error; an error wins over the table.
    pub fn status(&self) -> CollectionStatus<'_> {
        if self.loading {
            CollectionStatus::Loading
        } else if let Some(error) = self.error.as_deref() {
            CollectionStatus::Failed(error)
        } else {
            CollectionStatus::Ready
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn find(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Length the collection would have once `id` is removed.
    pub fn len_without(&self, id: UserId) -> usize {
        self.users.iter().filter(|user| user.id != id).count()
    }
}

/// State-transition messages produced by the record store operations.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    LoadStarted,
    LoadSucceeded(Vec<User>),
    LoadFailed(String),
    UpdateSucceeded(User),
    DeleteSucceeded(UserId),
}

impl ActorState for RecordCollectionState {
    type Event = StoreEvent;

    fn apply(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::LoadStarted => {
                self.loading = true;
                self.error = None;
            }
            StoreEvent::LoadSucceeded(users) => {
                self.loading = false;
                self.users = dedupe_by_id(users);
            }
            StoreEvent::LoadFailed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            StoreEvent::UpdateSucceeded(user) => {
                // An id that is no longer present is dropped silently
                if let Some(slot) = self.users.iter_mut().find(|u| u.id == user.id) {
                    *slot = user;
                }
            }
            StoreEvent::DeleteSucceeded(id) => {
                self.users.retain(|user| user.id != id);
            }
        }
    }
}

fn dedupe_by_id(users: Vec<User>) -> Vec<User> {
    let mut seen = HashSet::with_capacity(users.len());
    users
        .into_iter()
        .filter(|user| {
            let first = seen.insert(user.id);
            if !first {
                warn!(id = %user.id, "Dropping repeated id from load response");
            }
            first
        })
        .collect()
}
