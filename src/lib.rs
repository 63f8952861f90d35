//! # Cart Store
//!
//! > **Client-side shopping-cart state: quantities, a checkout lifecycle, derived totals.**
//!
//! A single Tokio task owns the cart and applies actions one at a time. Everything else talks
//! to it through a cloneable client, so edits are run-to-completion without any locks.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! A generic single-state store on the actor model.
//! - **Key items**: [`Reducer`](framework::Reducer), [`StoreActor`](framework::StoreActor),
//!   [`StoreClient`](framework::StoreClient).
//!
//! ### 2. The Cart ([`model`], [`cart`])
//! - [`CartState`](model::CartState): items, checkout status, last error message.
//! - [`CartAction`](cart::CartAction) and the reducer that applies it.
//!
//! ### 3. Checkout ([`checkout`])
//! The async lifecycle around an external [`CheckoutGateway`](checkout::CheckoutGateway):
//!
//! ```text
//! READY   --begin checkout-->   LOADING
//! LOADING --success: true-->    READY  (items cleared)
//! LOADING --success: false-->   ERROR
//! LOADING --gateway failed-->   ERROR  (error message recorded)
//! ERROR   --begin checkout-->   LOADING
//! ```
//!
//! The cart is not locked while the gateway call is pending. Edits made in that window are
//! applied, and a successful checkout then clears them too.
//!
//! ### 4. Selectors ([`selectors`])
//! Total count and total price, memoized on the identity of their inputs.
//!
//! ### 5. The Interface ([`clients`]) and the Orchestrator ([`lifecycle`])
//! - [`CartClient`](clients::CartClient): the operations a storefront UI calls.
//! - [`CartSystem`](lifecycle::CartSystem): spawns the store and wires the gateway.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! cargo test
//! ```

pub mod cart;
pub mod checkout;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod selectors;
