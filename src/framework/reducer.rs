//! # Reducer Trait
//!
//! The `Reducer` trait defines the contract a state type must satisfy to be owned by a
//! [`StoreActor`](crate::framework::StoreActor). It names the action vocabulary and the error
//! type, and provides the single synchronous hook (`reduce`) through which every state change
//! flows.
//!
//! # Architecture Note
//! By funnelling every mutation through `reduce`, the store actor can be written *once* and the
//! state type stays a plain value: easy to clone into snapshots, easy to test without a runtime.
//!
//! Reducers are deliberately synchronous. Anything that needs to wait (e.g. a checkout gateway
//! call) happens outside the actor and reports back by dispatching further actions.

use std::fmt::Debug;

/// Trait that any state type must implement to be managed by a `StoreActor`.
///
/// # Associated Types
/// - `Action`: the closed set of things that can happen to this state.
/// - `Error`: what `reduce` returns when an action cannot be applied.
pub trait Reducer: Clone + Send + Sync + 'static {
    /// Enum of state transitions (e.g. `AddToCart`).
    type Action: Send + Sync + Debug;

    /// The error type for this state.
    /// Must implement std::error::Error so the framework can box it.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Applies a single action to the state.
    ///
    /// Runs to completion inside the actor task; no other action observes a
    /// partially applied state.
    fn reduce(&mut self, action: Self::Action) -> Result<(), Self::Error>;
}
