//! # Checkout
//!
//! Everything between "the user pressed checkout" and the cart's terminal status.
//!
//! - [`CheckoutGateway`] - the external async capability that performs the remote checkout
//! - [`run_checkout`] - the lifecycle: `Loading`, gateway call, then `Ready` or `Error`
//! - [`spawn_checkout`] - the same lifecycle on its own task, so it cannot be abandoned halfway
//! - [`ItemsSource`] - where the submitted items come from: a caller snapshot
//!   ([`FixedItems`]) or the store's live state
//! - [`SimulatedGateway`] - canned gateway used by the demo binary

pub mod gateway;
pub mod lifecycle;
pub mod simulated;

pub use gateway::*;
pub use lifecycle::*;
pub use simulated::*;
