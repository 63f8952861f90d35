//! # Cart Store
//!
//! The cart's actions, its reducer, and the factory that creates the store actor.
//!
//! ## Structure
//!
//! - [`actions`] - [`CartAction`], the vocabulary of the store
//! - [`reducer`] - [`Reducer`](crate::framework::Reducer) implementation for
//!   [`CartState`](crate::model::CartState)
//! - [`error`] - [`CartError`]
//! - [`new()`] - Factory that creates the actor and its generic client
//!
//! ## Usage
//!
//! ```rust
//! use cart_store::cart::{self, CartAction};
//! use cart_store::model::ProductId;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, store) = cart::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let state = store.dispatch(CartAction::AddToCart(ProductId::from("A"))).await.unwrap();
//!     assert_eq!(state.quantity_of("A"), Some(1));
//! }
//! ```

pub mod actions;
pub mod error;
pub mod reducer;

pub use actions::*;
pub use error::*;

use crate::framework::{StoreActor, StoreClient};
use crate::model::CartState;

/// Creates a cart store actor holding an empty cart, and its client.
pub fn new(buffer_size: usize) -> (StoreActor<CartState>, StoreClient<CartState>) {
    StoreActor::new(CartState::new(), buffer_size)
}
