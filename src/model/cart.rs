//! Cart state and its building blocks.
//!
//! The reducer that drives these types lives in [`crate::cart`]; see
//! [`impl Reducer for CartState`](crate::model::CartState#impl-Reducer-for-CartState).

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::Arc;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Product id to quantity.
///
/// Quantities are signed: `UpdateQuantity` stores whatever it is given, zero and negative
/// values included.
pub type CartItems = HashMap<ProductId, i64>;

/// Where the cart is in its checkout lifecycle.
///
/// ```text
/// Ready   --CheckoutPending-->            Loading
/// Loading --CheckoutFulfilled(true)-->    Ready (items cleared)
/// Loading --CheckoutFulfilled(false)-->   Error
/// Loading --CheckoutRejected-->           Error (error_message set)
/// Error   --CheckoutPending-->            Loading
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckoutStatus {
    #[default]
    Ready,
    Loading,
    Error,
    /// Reserved. Nothing transitions into or out of this status.
    NotReady,
}

impl CheckoutStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStatus::Ready => "READY",
            CheckoutStatus::Loading => "LOADING",
            CheckoutStatus::Error => "ERROR",
            CheckoutStatus::NotReady => "NOT_READY",
        }
    }
}

impl Display for CheckoutStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The whole cart as held by the store.
///
/// `items` sits behind an `Arc` so snapshots are cheap and so selectors can tell by pointer
/// whether the items changed. Every action that changes items installs a fresh `Arc`; actions
/// that change nothing leave the existing one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    pub items: Arc<CartItems>,
    pub checkout_status: CheckoutStatus,
    pub error_message: String,
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

impl CartState {
    /// Empty cart, `Ready`, no error message.
    pub fn new() -> Self {
        Self {
            items: Arc::new(CartItems::new()),
            checkout_status: CheckoutStatus::Ready,
            error_message: String::new(),
        }
    }

    /// Starts from the given items instead of an empty cart.
    pub fn with_items(items: CartItems) -> Self {
        Self {
            items: Arc::new(items),
            ..Self::new()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Quantity stored for `id`, if the key is present.
    pub fn quantity_of(&self, id: &str) -> Option<i64> {
        self.items.get(id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cart_is_ready_and_empty() {
        let state = CartState::new();
        assert!(state.is_empty());
        assert_eq!(state.checkout_status, CheckoutStatus::Ready);
        assert_eq!(state.error_message, "");
    }

    #[test]
    fn test_state_serializes_with_ui_field_names() {
        let mut items = CartItems::new();
        items.insert(ProductId::from("A"), 2);
        let state = CartState::with_items(items);

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["items"]["A"], 2);
        assert_eq!(json["checkoutStatus"], "READY");
        assert_eq!(json["errorMessage"], "");
    }

    #[test]
    fn test_status_wire_names() {
        let status: CheckoutStatus = serde_json::from_str("\"NOT_READY\"").unwrap();
        assert_eq!(status, CheckoutStatus::NotReady);
        assert_eq!(CheckoutStatus::Loading.to_string(), "LOADING");
    }
}
