//! Actions understood by the cart store.
//!
//! The first three are the UI mutations. The `Checkout*` actions are dispatched by the
//! checkout lifecycle in [`crate::checkout`] around the gateway call; UI code does not
//! send them directly.

use crate::checkout::CheckoutResponse;
use crate::model::ProductId;

/// State transitions for [`CartState`](crate::model::CartState).
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Increments the quantity for a product, starting at 1.
    AddToCart(ProductId),
    /// Drops a product from the cart. Absent products are ignored.
    RemoveFromCart(ProductId),
    /// Sets a quantity verbatim. Zero and negative values are stored, not removed.
    UpdateQuantity { id: ProductId, quantity: i64 },
    /// A checkout has started.
    CheckoutPending,
    /// The gateway answered.
    CheckoutFulfilled(CheckoutResponse),
    /// The gateway call failed outright.
    CheckoutRejected { message: Option<String> },
}
