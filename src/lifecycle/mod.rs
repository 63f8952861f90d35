//! # System Lifecycle
//!
//! Starting, wiring, and stopping the cart store, plus process-wide setup.
//!
//! ## The CartSystem Pattern
//!
//! [`CartSystem`] creates the store actor, spawns its event loop, and hands the checkout
//! gateway to the [`CartClient`](crate::clients::CartClient) it exposes:
//!
//! ```rust,ignore
//! let (actor, store) = cart::new(config.buffer_size);
//! let handle = tokio::spawn(actor.run());
//! let cart_client = CartClient::new(store, gateway);
//! ```
//!
//! The gateway is *not* given to the actor. Checkout runs in the caller's task and talks to
//! the store through the client, so the store keeps serving cart edits while a checkout is
//! waiting on the gateway.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for the actor task to finish
//!
//! ## Configuration
//!
//! [`CartConfig`] carries the mailbox size and the demo gateway latency. It can be built from
//! defaults, from `CART_*` environment variables, or deserialized with serde.
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes structured logging; see the [`tracing`](self::tracing) module.

pub mod cart_system;
pub mod config;
pub mod tracing;

pub use self::cart_system::*;
pub use self::config::*;
pub use self::tracing::*;
