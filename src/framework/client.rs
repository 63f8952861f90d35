//! # Store Client
//!
//! The generic async handle used to talk to a `StoreActor`.

use crate::framework::error::FrameworkError;
use crate::framework::message::StoreRequest;
use crate::framework::reducer::Reducer;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `StoreActor`.
///
/// Holds only a sender, so cloning is cheap and clones can be handed to any task.
/// The actor stops once every clone is dropped.
#[derive(Clone)]
pub struct StoreClient<S: Reducer> {
    sender: mpsc::Sender<StoreRequest<S>>,
}

impl<S: Reducer> StoreClient<S> {
    pub fn new(sender: mpsc::Sender<StoreRequest<S>>) -> Self {
        Self { sender }
    }

    /// Applies `action` and returns the state as it was right after it.
    pub async fn dispatch(&self, action: S::Action) -> Result<S, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Returns a clone of the current state.
    pub async fn snapshot(&self) -> Result<S, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
