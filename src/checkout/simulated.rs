//! An in-process gateway that waits and then answers with a fixed outcome.
//!
//! Stands in for the storefront API when running the demo binary.

use super::gateway::{CheckoutGateway, CheckoutResponse, GatewayError};
use crate::model::CartItems;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// How a [`SimulatedGateway`] answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulatedOutcome {
    /// `{ success: true }`
    Approve,
    /// `{ success: false }`
    Decline,
    /// The call fails with this message.
    Fail(String),
}

#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    latency: Duration,
    outcome: SimulatedOutcome,
}

impl SimulatedGateway {
    pub fn new(latency: Duration, outcome: SimulatedOutcome) -> Self {
        Self { latency, outcome }
    }

    /// Approves every checkout after `latency`.
    pub fn approving(latency: Duration) -> Self {
        Self::new(latency, SimulatedOutcome::Approve)
    }
}

#[async_trait]
impl CheckoutGateway for SimulatedGateway {
    async fn checkout(&self, items: &CartItems) -> Result<CheckoutResponse, GatewayError> {
        debug!(products = items.len(), latency_ms = self.latency.as_millis() as u64, "Simulated checkout");
        tokio::time::sleep(self.latency).await;
        match &self.outcome {
            SimulatedOutcome::Approve => Ok(CheckoutResponse { success: true }),
            SimulatedOutcome::Decline => Ok(CheckoutResponse { success: false }),
            SimulatedOutcome::Fail(message) => Err(GatewayError::new(message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulated_outcomes() {
        let items = CartItems::new();

        let approve = SimulatedGateway::approving(Duration::from_millis(1));
        assert_eq!(approve.checkout(&items).await, Ok(CheckoutResponse { success: true }));

        let decline = SimulatedGateway::new(Duration::ZERO, SimulatedOutcome::Decline);
        assert_eq!(decline.checkout(&items).await, Ok(CheckoutResponse { success: false }));

        let fail = SimulatedGateway::new(Duration::ZERO, SimulatedOutcome::Fail("boom".into()));
        assert_eq!(fail.checkout(&items).await, Err(GatewayError::new("boom")));
    }
}
