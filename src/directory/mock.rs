//! # Mock Directory
//!
//! An in-memory [`DirectoryService`] driven by expectations, for testing the record
//! store and the controller without a network.
//!
//! ```ignore
//! let directory = MockDirectory::new();
//! directory.expect_list().return_ok(vec![User::new(1, "John Doe", "john@example.com", "Company A")]);
//! directory.expect_delete(UserId(1)).return_ok();
//!
//! let system = DashboardSystem::new(Arc::new(directory.clone()), &DashboardConfig::default());
//! // ... drive the system ...
//! directory.verify(); // Ensures all expectations were met
//! ```
//!
//! Calls are matched to the first pending expectation of the same kind (and id),
//! not strictly in FIFO order, because fire-and-forget operations may reach the
//! directory in any order. A response can be held back with `hold_until` to observe
//! the store while a request is still pending.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::oneshot;

use super::{DirectoryError, DirectoryService};
use crate::model::{User, UserId};

/// A request the mock received, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryCall {
    List,
    Update(User),
    Delete(UserId),
}

enum Expectation {
    List {
        gate: Option<oneshot::Receiver<()>>,
        response: Result<Vec<User>, String>,
    },
    Update {
        id: UserId,
        gate: Option<oneshot::Receiver<()>>,
        response: Result<(), String>,
    },
    Delete {
        id: UserId,
        gate: Option<oneshot::Receiver<()>>,
        response: Result<(), String>,
    },
}

impl Expectation {
    fn matches(&self, call: &DirectoryCall) -> bool {
        match (self, call) {
            (Expectation::List { .. }, DirectoryCall::List) => true,
            (Expectation::Update { id, .. }, DirectoryCall::Update(user)) => *id == user.id,
            (Expectation::Delete { id, .. }, DirectoryCall::Delete(target)) => id == target,
            _ => false,
        }
    }
}

#[derive(Default)]
struct MockInner {
    expectations: VecDeque<Expectation>,
    calls: Vec<DirectoryCall>,
    unexpected: Vec<DirectoryCall>,
}

/// A mock directory with expectation tracking for fluent testing.
///
/// Clones share the same expectations, so one clone can be handed to the system
/// while the test keeps another to call [`MockDirectory::verify`].
#[derive(Clone, Default)]
pub struct MockDirectory {
    inner: Arc<Mutex<MockInner>>,
}

impl MockDirectory {
    /// Creates a new mock directory with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Expects a `list_users` call.
    pub fn expect_list(&self) -> ListExpectationBuilder {
        ListExpectationBuilder {
            gate: None,
            inner: self.inner.clone(),
        }
    }

    /// Expects an `update_user` call for `id`.
    pub fn expect_update(&self, id: UserId) -> MutationExpectationBuilder {
        MutationExpectationBuilder {
            kind: MutationKind::Update,
            id,
            gate: None,
            inner: self.inner.clone(),
        }
    }

    /// Expects a `delete_user` call for `id`.
    pub fn expect_delete(&self, id: UserId) -> MutationExpectationBuilder {
        MutationExpectationBuilder {
            kind: MutationKind::Delete,
            id,
            gate: None,
            inner: self.inner.clone(),
        }
    }

    /// Every call received so far, matched or not.
    pub fn calls(&self) -> Vec<DirectoryCall> {
        self.lock().calls.clone()
    }

    /// Verifies that all expectations were met and no unexpected call arrived.
    pub fn verify(&self) {
        let inner = self.lock();
        if !inner.unexpected.is_empty() {
            panic!("Unexpected directory calls: {:?}", inner.unexpected);
        }
        if !inner.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                inner.expectations.len()
            );
        }
    }

    fn take(&self, call: DirectoryCall) -> Option<Expectation> {
        let mut inner = self.lock();
        inner.calls.push(call.clone());
        let position = inner.expectations.iter().position(|e| e.matches(&call));
        match position.and_then(|index| inner.expectations.remove(index)) {
            Some(expectation) => Some(expectation),
            None => {
                inner.unexpected.push(call);
                None
            }
        }
    }
}

async fn wait_for(gate: Option<oneshot::Receiver<()>>) {
    if let Some(gate) = gate {
        // A dropped sender releases the gate as well
        let _ = gate.await;
    }
}

#[async_trait]
impl DirectoryService for MockDirectory {
    async fn list_users(&self) -> Result<Vec<User>, DirectoryError> {
        match self.take(DirectoryCall::List) {
            Some(Expectation::List { gate, response }) => {
                wait_for(gate).await;
                response.map_err(DirectoryError::Service)
            }
            _ => Err(DirectoryError::Service("unexpected list_users".into())),
        }
    }

    async fn update_user(&self, user: &User) -> Result<(), DirectoryError> {
        match self.take(DirectoryCall::Update(user.clone())) {
            Some(Expectation::Update { gate, response, .. }) => {
                wait_for(gate).await;
                response.map_err(DirectoryError::Service)
            }
            _ => Err(DirectoryError::Service(format!("unexpected update_user {}", user.id))),
        }
    }

    async fn delete_user(&self, id: UserId) -> Result<(), DirectoryError> {
        match self.take(DirectoryCall::Delete(id)) {
            Some(Expectation::Delete { gate, response, .. }) => {
                wait_for(gate).await;
                response.map_err(DirectoryError::Service)
            }
            _ => Err(DirectoryError::Service(format!("unexpected delete_user {id}"))),
        }
    }
}

/// Builder for `list_users` expectations.
pub struct ListExpectationBuilder {
    gate: Option<oneshot::Receiver<()>>,
    inner: Arc<Mutex<MockInner>>,
}

impl ListExpectationBuilder {
    /// Holds the response until `gate` fires (or its sender is dropped).
    pub fn hold_until(mut self, gate: oneshot::Receiver<()>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Sets the expectation to return these records.
    pub fn return_ok(self, users: Vec<User>) {
        self.push(Ok(users));
    }

    /// Sets the expectation to fail with `message`.
    pub fn return_err(self, message: impl Into<String>) {
        self.push(Err(message.into()));
    }

    fn push(self, response: Result<Vec<User>, String>) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.expectations.push_back(Expectation::List {
            gate: self.gate,
            response,
        });
    }
}

enum MutationKind {
    Update,
    Delete,
}

/// Builder for `update_user` and `delete_user` expectations.
pub struct MutationExpectationBuilder {
    kind: MutationKind,
    id: UserId,
    gate: Option<oneshot::Receiver<()>>,
    inner: Arc<Mutex<MockInner>>,
}

impl MutationExpectationBuilder {
    /// Holds the response until `gate` fires (or its sender is dropped).
    pub fn hold_until(mut self, gate: oneshot::Receiver<()>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Sets the expectation to succeed.
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    /// Sets the expectation to fail with `message`.
    pub fn return_err(self, message: impl Into<String>) {
        self.push(Err(message.into()));
    }

    fn push(self, response: Result<(), String>) {
        let expectation = match self.kind {
            MutationKind::Update => Expectation::Update {
                id: self.id,
                gate: self.gate,
                response,
            },
            MutationKind::Delete => Expectation::Delete {
                id: self.id,
                gate: self.gate,
                response,
            },
        };
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.expectations.push_back(expectation);
    }
}
