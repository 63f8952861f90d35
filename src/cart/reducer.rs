//! Reducer implementation for the cart state.
//!
//! Enables [`CartState`] to be owned by the generic [`crate::framework::StoreActor`].

use super::{CartAction, CartError};
use crate::framework::Reducer;
use crate::model::{CartItems, CartState, CheckoutStatus};
use std::sync::Arc;
use tracing::info;

impl CartState {
    /// Replaces `items` with an edited copy, giving selectors a new identity to see.
    fn edit_items(&mut self, edit: impl FnOnce(&mut CartItems)) {
        let mut next = CartItems::clone(&self.items);
        edit(&mut next);
        self.items = Arc::new(next);
    }

    fn set_status(&mut self, status: CheckoutStatus) {
        if self.checkout_status != status {
            info!(from = %self.checkout_status, to = %status, "Checkout status changed");
        }
        self.checkout_status = status;
    }
}

impl Reducer for CartState {
    type Action = CartAction;
    type Error = CartError;

    /// Applies a cart action.
    ///
    /// None of the cart actions can fail; the `Result` is the framework's contract.
    fn reduce(&mut self, action: CartAction) -> Result<(), CartError> {
        match action {
            CartAction::AddToCart(id) => {
                self.edit_items(|items| {
                    let quantity = items.entry(id).or_insert(0);
                    *quantity = quantity.saturating_add(1);
                });
            }
            CartAction::RemoveFromCart(id) => {
                if self.items.contains_key(&id) {
                    self.edit_items(|items| {
                        items.remove(&id);
                    });
                }
            }
            CartAction::UpdateQuantity { id, quantity } => {
                if self.items.get(&id) != Some(&quantity) {
                    self.edit_items(|items| {
                        items.insert(id, quantity);
                    });
                }
            }
            CartAction::CheckoutPending => {
                self.set_status(CheckoutStatus::Loading);
            }
            CartAction::CheckoutFulfilled(response) => {
                if response.success {
                    self.set_status(CheckoutStatus::Ready);
                    // Clears what is in the cart now, including anything added while pending.
                    self.items = Arc::new(CartItems::new());
                } else {
                    self.set_status(CheckoutStatus::Error);
                }
            }
            CartAction::CheckoutRejected { message } => {
                self.set_status(CheckoutStatus::Error);
                self.error_message = message.unwrap_or_default();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::CheckoutResponse;
    use crate::model::ProductId;

    fn apply(state: &mut CartState, action: CartAction) {
        state.reduce(action).unwrap();
    }

    fn id(s: &str) -> ProductId {
        ProductId::from(s)
    }

    #[test]
    fn test_add_twice_counts_two() {
        let mut state = CartState::new();
        apply(&mut state, CartAction::AddToCart(id("A")));
        apply(&mut state, CartAction::AddToCart(id("A")));
        assert_eq!(state.quantity_of("A"), Some(2));
    }

    #[test]
    fn test_add_then_remove_drops_key() {
        let mut state = CartState::new();
        apply(&mut state, CartAction::AddToCart(id("A")));
        apply(&mut state, CartAction::RemoveFromCart(id("A")));
        assert_eq!(state.quantity_of("A"), None);
        assert!(state.is_empty());
    }

    #[test]
    fn test_remove_absent_keeps_same_items() {
        let mut state = CartState::new();
        apply(&mut state, CartAction::AddToCart(id("A")));
        let before = state.clone();

        apply(&mut state, CartAction::RemoveFromCart(id("B")));

        assert_eq!(state, before);
        assert!(Arc::ptr_eq(&state.items, &before.items));
    }

    #[test]
    fn test_update_quantity_is_permissive() {
        let mut state = CartState::new();
        apply(&mut state, CartAction::AddToCart(id("A")));

        apply(&mut state, CartAction::UpdateQuantity { id: id("A"), quantity: 0 });
        assert_eq!(state.quantity_of("A"), Some(0));

        apply(&mut state, CartAction::UpdateQuantity { id: id("B"), quantity: -4 });
        assert_eq!(state.quantity_of("B"), Some(-4));
    }

    #[test]
    fn test_add_after_zero_quantity_starts_at_one() {
        let mut state = CartState::new();
        apply(&mut state, CartAction::UpdateQuantity { id: id("A"), quantity: 0 });
        apply(&mut state, CartAction::AddToCart(id("A")));
        assert_eq!(state.quantity_of("A"), Some(1));
    }

    #[test]
    fn test_item_changes_install_new_items() {
        let mut state = CartState::new();
        let empty = state.items.clone();

        apply(&mut state, CartAction::AddToCart(id("A")));
        assert!(!Arc::ptr_eq(&state.items, &empty));

        let after_add = state.items.clone();
        apply(&mut state, CartAction::UpdateQuantity { id: id("A"), quantity: 1 });
        assert!(Arc::ptr_eq(&state.items, &after_add), "same value, same items");

        apply(&mut state, CartAction::UpdateQuantity { id: id("A"), quantity: 5 });
        assert!(!Arc::ptr_eq(&state.items, &after_add));
    }

    #[test]
    fn test_checkout_success_clears_items() {
        let mut state = CartState::new();
        apply(&mut state, CartAction::AddToCart(id("A")));

        apply(&mut state, CartAction::CheckoutPending);
        assert_eq!(state.checkout_status, CheckoutStatus::Loading);

        apply(&mut state, CartAction::CheckoutFulfilled(CheckoutResponse { success: true }));
        assert_eq!(state.checkout_status, CheckoutStatus::Ready);
        assert!(state.is_empty());
    }

    #[test]
    fn test_checkout_logical_failure_keeps_items() {
        let mut state = CartState::new();
        apply(&mut state, CartAction::AddToCart(id("A")));
        apply(&mut state, CartAction::CheckoutPending);

        apply(&mut state, CartAction::CheckoutFulfilled(CheckoutResponse { success: false }));

        assert_eq!(state.checkout_status, CheckoutStatus::Error);
        assert_eq!(state.quantity_of("A"), Some(1));
        assert_eq!(state.error_message, "");
    }

    #[test]
    fn test_checkout_rejected_records_message() {
        let mut state = CartState::new();
        apply(&mut state, CartAction::CheckoutPending);
        apply(
            &mut state,
            CartAction::CheckoutRejected {
                message: Some("network down".into()),
            },
        );
        assert_eq!(state.checkout_status, CheckoutStatus::Error);
        assert_eq!(state.error_message, "network down");

        apply(&mut state, CartAction::CheckoutPending);
        apply(&mut state, CartAction::CheckoutRejected { message: None });
        assert_eq!(state.error_message, "");
    }

    #[test]
    fn test_error_message_survives_later_success() {
        let mut state = CartState::new();
        apply(&mut state, CartAction::CheckoutPending);
        apply(
            &mut state,
            CartAction::CheckoutRejected {
                message: Some("timeout".into()),
            },
        );

        apply(&mut state, CartAction::CheckoutPending);
        assert_eq!(state.checkout_status, CheckoutStatus::Loading);
        apply(&mut state, CartAction::CheckoutFulfilled(CheckoutResponse { success: true }));

        assert_eq!(state.checkout_status, CheckoutStatus::Ready);
        assert_eq!(state.error_message, "timeout");
    }
}
