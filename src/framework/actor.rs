//! # Store Actor
//!
//! The `StoreActor` is the "server" half of the store: it owns the state value and the
//! receiving end of the request channel, and applies requests strictly one at a time.

use crate::framework::client::StoreClient;
use crate::framework::error::FrameworkError;
use crate::framework::message::StoreRequest;
use crate::framework::reducer::Reducer;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a single state value.
///
/// **Concurrency Model**:
/// The actor processes its mailbox sequentially, so every `reduce` call runs to completion
/// before the next request is looked at. No `Mutex` guards the state; exclusive ownership
/// inside the task is the guarantee.
///
/// # Usage Pattern
///
/// 1.  **Create**: `StoreActor::new(initial, buffer_size)` returns the actor and its client.
/// 2.  **Run**: spawn `actor.run()` on the Tokio runtime.
/// 3.  **Use**: clone the client freely; drop every clone to stop the actor.
///
/// ```rust
/// use cart_store::framework::{Reducer, StoreActor};
///
/// #[derive(Clone, Debug, Default)]
/// struct Counter { value: i64 }
/// #[derive(Debug)]
/// enum CounterAction { Increment }
/// #[derive(Debug, thiserror::Error)]
/// #[error("counter error")]
/// struct CounterError;
///
/// impl Reducer for Counter {
///     type Action = CounterAction;
///     type Error = CounterError;
///     fn reduce(&mut self, action: CounterAction) -> Result<(), CounterError> {
///         match action { CounterAction::Increment => self.value += 1 }
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::new(Counter::default(), 10);
///     tokio::spawn(actor.run());
///     let state = client.dispatch(CounterAction::Increment).await.unwrap();
///     assert_eq!(state.value, 1);
/// }
/// ```
pub struct StoreActor<S: Reducer> {
    receiver: mpsc::Receiver<StoreRequest<S>>,
    state: S,
    applied: u64,
}

impl<S: Reducer> StoreActor<S> {
    /// Creates a new `StoreActor` holding `initial` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `initial` - The state the store starts from.
    /// * `buffer_size` - Capacity of the MPSC channel. When full, client calls wait for space.
    pub fn new(initial: S, buffer_size: usize) -> (Self, StoreClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            state: initial,
            applied: 0,
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // Just the type name (e.g. "CartState" instead of "cart_store::model::cart::CartState")
        let state_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Dispatch { action, respond_to } => {
                    debug!(state_type, ?action, "Dispatch");
                    match self.state.reduce(action) {
                        Ok(()) => {
                            self.applied += 1;
                            let _ = respond_to.send(Ok(self.state.clone()));
                        }
                        Err(e) => {
                            warn!(state_type, error = %e, "Reduce failed");
                            let _ = respond_to.send(Err(FrameworkError::ReducerError(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Snapshot { respond_to } => {
                    debug!(state_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
            }
        }

        info!(state_type, applied = self.applied, "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Tally {
        total: u32,
    }

    #[derive(Debug)]
    enum TallyAction {
        Add(u32),
        Overflow,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("tally overflow")]
    struct TallyError;

    impl Reducer for Tally {
        type Action = TallyAction;
        type Error = TallyError;

        fn reduce(&mut self, action: TallyAction) -> Result<(), TallyError> {
            match action {
                TallyAction::Add(n) => {
                    self.total = self.total.checked_add(n).ok_or(TallyError)?;
                    Ok(())
                }
                TallyAction::Overflow => Err(TallyError),
            }
        }
    }

    #[tokio::test]
    async fn test_dispatch_returns_post_action_snapshot() {
        let (actor, client) = StoreActor::new(Tally::default(), 10);
        tokio::spawn(actor.run());

        let after_first = client.dispatch(TallyAction::Add(2)).await.unwrap();
        assert_eq!(after_first.total, 2);

        let after_second = client.dispatch(TallyAction::Add(3)).await.unwrap();
        assert_eq!(after_second.total, 5);

        let current = client.snapshot().await.unwrap();
        assert_eq!(current, Tally { total: 5 });
    }

    #[tokio::test]
    async fn test_reducer_error_leaves_state_untouched() {
        let (actor, client) = StoreActor::new(Tally { total: 7 }, 10);
        tokio::spawn(actor.run());

        let result = client.dispatch(TallyAction::Overflow).await;
        assert!(matches!(result, Err(FrameworkError::ReducerError(_))));

        let current = client.snapshot().await.unwrap();
        assert_eq!(current.total, 7);
    }

    #[tokio::test]
    async fn test_actor_stops_when_clients_dropped() {
        let (actor, client) = StoreActor::new(Tally::default(), 10);
        let handle = tokio::spawn(actor.run());

        client.dispatch(TallyAction::Add(1)).await.unwrap();
        drop(client);

        handle.await.unwrap();
    }
}
