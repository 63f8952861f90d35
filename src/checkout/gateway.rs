//! The checkout gateway seam.

use crate::model::CartItems;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What the gateway answers when the call itself went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub success: bool,
}

/// The gateway call failed (transport, validation, anything).
///
/// All causes are treated alike; only the optional message reaches the cart.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{}", .message.as_deref().unwrap_or("checkout gateway failed"))]
pub struct GatewayError {
    pub message: Option<String>,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// A failure that carries no message.
    pub fn silent() -> Self {
        Self { message: None }
    }

    /// The message as recorded in the cart: empty when there is none.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}

/// Remote checkout capability.
///
/// Given `product id → quantity`, performs the remote operation. Implementations may take
/// arbitrarily long; the cart stays usable meanwhile.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    async fn checkout(&self, items: &CartItems) -> Result<CheckoutResponse, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_display() {
        assert_eq!(GatewayError::new("network down").to_string(), "network down");
        assert_eq!(GatewayError::silent().to_string(), "checkout gateway failed");
        assert_eq!(GatewayError::silent().message(), "");
    }
}
