//! Generic single-state store built on the actor model.
//!
//! # Main Components
//!
//! - [`Reducer`] - Trait that state types implement to be owned by a store actor
//! - [`StoreActor`] - Task that owns the state and applies actions sequentially
//! - [`StoreClient`] - Cloneable async handle for dispatching actions and reading snapshots
//! - [`StoreHandle`] - Trait giving domain clients `snapshot`/`dispatch` with error mapping
//! - [`FrameworkError`] - Transport and reducer errors
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning a store actor.

pub mod actor;
pub mod client;
pub mod error;
pub mod handle;
pub mod message;
pub mod mock;
pub mod reducer;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use error::FrameworkError;
pub use handle::StoreHandle;
pub use message::{Response, StoreRequest};
pub use reducer::Reducer;
