//! # Mock Store & Testing Guide
//!
//! Utilities for testing store clients without spawning a real `StoreActor`.
//!
//! ## When to use Mocks vs the Real Store
//!
//! | Feature | MockStore | Real StoreActor |
//! |---------|-----------|-----------------|
//! | **State** | Canned replies | Real reducer |
//! | **Determinism** | Fully scripted | Subject to scheduler |
//! | **Use Case** | Logic *around* the client | The reducer or the whole system |
//! | **Error Injection** | Easy (`return_err`) | Needs a failing action |
//!
//! Two styles are available:
//!
//! - [`MockStore`]: queue expectations up front, run the code under test, then `verify()`.
//! - [`create_mock_client`] plus [`expect_dispatch`] / [`expect_snapshot`]: drive the
//!   receiving end by hand and inspect every request as it arrives.
//!
//! ```rust
//! use cart_store::framework::mock::MockStore;
//! use cart_store::framework::FrameworkError;
//! use cart_store::model::CartState;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<CartState>::new();
//!     mock.expect_snapshot().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     let result = client.snapshot().await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::framework::client::StoreClient;
use crate::framework::error::FrameworkError;
use crate::framework::message::{Response, StoreRequest};
use crate::framework::reducer::Reducer;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the reply the mock should send for it.
enum Expectation<S: Reducer> {
    Dispatch { response: Result<S, FrameworkError> },
    Snapshot { response: Result<S, FrameworkError> },
}

type Shared<T> = Arc<Mutex<T>>;

fn lock<T>(shared: &Shared<T>) -> MutexGuard<'_, T> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock store with expectation tracking for fluent testing.
///
/// Every dispatched action is recorded and can be read back with [`MockStore::dispatched`].
pub struct MockStore<S: Reducer> {
    client: StoreClient<S>,
    expectations: Shared<VecDeque<Expectation<S>>>,
    dispatched: Shared<Vec<S::Action>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: Reducer> Default for MockStore<S>
where
    S::Action: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Reducer> MockStore<S>
where
    S::Action: Clone,
{
    /// Creates a new mock store with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<S>>(100);
        let expectations: Shared<VecDeque<Expectation<S>>> = Arc::new(Mutex::new(VecDeque::new()));
        let dispatched: Shared<Vec<S::Action>> = Arc::new(Mutex::new(Vec::new()));

        let expectations_clone = expectations.clone();
        let dispatched_clone = dispatched.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&expectations_clone).pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Dispatch { action, respond_to },
                        Some(Expectation::Dispatch { response }),
                    ) => {
                        lock(&dispatched_clone).push(action);
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            dispatched,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<S> {
        self.client.clone()
    }

    /// Expects a `dispatch` request.
    pub fn expect_dispatch(&mut self) -> ExpectationBuilder<S> {
        ExpectationBuilder {
            kind: Kind::Dispatch,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `snapshot` request.
    pub fn expect_snapshot(&mut self) -> ExpectationBuilder<S> {
        ExpectationBuilder {
            kind: Kind::Snapshot,
            expectations: self.expectations.clone(),
        }
    }

    /// Actions received so far, in arrival order.
    pub fn dispatched(&self) -> Vec<S::Action> {
        lock(&self.dispatched).clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

#[derive(Clone, Copy)]
enum Kind {
    Dispatch,
    Snapshot,
}

/// Builder for a queued expectation.
pub struct ExpectationBuilder<S: Reducer> {
    kind: Kind,
    expectations: Shared<VecDeque<Expectation<S>>>,
}

impl<S: Reducer> ExpectationBuilder<S> {
    /// Reply with `state`.
    pub fn return_ok(self, state: S) {
        self.push(Ok(state));
    }

    /// Reply with `error`.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<S, FrameworkError>) {
        let expectation = match self.kind {
            Kind::Dispatch => Expectation::Dispatch { response },
            Kind::Snapshot => Expectation::Snapshot { response },
        };
        lock(&self.expectations).push_back(expectation);
    }
}

// =============================================================================
// MANUAL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it reads requests with [`expect_dispatch`] or
/// [`expect_snapshot`] and answers through the returned responder, which makes it possible
/// to hold a reply back and observe the caller while it waits.
pub fn create_mock_client<S: Reducer>(
    buffer_size: usize,
) -> (StoreClient<S>, mpsc::Receiver<StoreRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Returns the next request if it is a Dispatch.
pub async fn expect_dispatch<S: Reducer>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(S::Action, Response<S>)> {
    match receiver.recv().await {
        Some(StoreRequest::Dispatch { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a Snapshot.
pub async fn expect_snapshot<S: Reducer>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<Response<S>> {
    match receiver.recv().await {
        Some(StoreRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}
