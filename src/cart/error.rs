//! Error types for the cart.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// Checkout failures are not in here: they are absorbed into
/// [`CheckoutStatus::Error`](crate::model::CheckoutStatus::Error) and never returned.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// A cart item has no matching catalog entry, so it cannot be priced.
    #[error("Product missing from catalog: {0}")]
    UnknownProduct(ProductId),

    /// The store actor could not be reached.
    #[error("Store communication error: {0}")]
    StoreCommunication(String),

    /// The checkout task panicked or was cancelled by the runtime.
    #[error("Checkout task failed: {0}")]
    CheckoutTask(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::StoreCommunication(msg)
    }
}
