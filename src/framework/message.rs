//! # Store Messages
//!
//! Message types exchanged between a `StoreClient` and its `StoreActor`.

use crate::framework::error::FrameworkError;
use crate::framework::reducer::Reducer;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the store actor.
///
/// The store holds exactly one state value, so there are only two requests:
///
/// - **Dispatch**: apply an action through [`Reducer::reduce`] and reply with the resulting
///   state snapshot.
/// - **Snapshot**: reply with a clone of the current state.
///
/// Replying with a snapshot on dispatch lets callers observe the state exactly as it was
/// right after *their* action, even if other actions are queued behind it.
#[derive(Debug)]
pub enum StoreRequest<S: Reducer> {
    Dispatch {
        action: S::Action,
        respond_to: Response<S>,
    },
    Snapshot {
        respond_to: Response<S>,
    },
}
