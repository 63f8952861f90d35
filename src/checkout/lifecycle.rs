//! The checkout lifecycle shared by both checkout entry points.

use super::gateway::CheckoutGateway;
use crate::cart::{CartAction, CartError};
use crate::framework::{FrameworkError, StoreClient};
use crate::model::{CartItems, CartState};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn, Instrument};

/// Read access to the items a checkout should submit.
///
/// The lifecycle asks for items only after the cart is already `Loading`, so a source that
/// reads live state sees the cart as it is when the checkout starts.
#[async_trait]
pub trait ItemsSource: Send + Sync {
    async fn current_items(&self) -> Result<Arc<CartItems>, CartError>;
}

/// A caller-supplied snapshot.
#[derive(Debug, Clone)]
pub struct FixedItems(pub Arc<CartItems>);

#[async_trait]
impl ItemsSource for FixedItems {
    async fn current_items(&self) -> Result<Arc<CartItems>, CartError> {
        Ok(self.0.clone())
    }
}

/// Live items read from the store.
#[async_trait]
impl ItemsSource for StoreClient<CartState> {
    async fn current_items(&self) -> Result<Arc<CartItems>, CartError> {
        let state = self.snapshot().await.map_err(store_error)?;
        Ok(state.items)
    }
}

fn store_error(e: FrameworkError) -> CartError {
    CartError::StoreCommunication(e.to_string())
}

/// Runs one checkout against `store`.
///
/// 1. Dispatches `CheckoutPending` and waits for the store to apply it.
/// 2. Reads the items from `source` and hands them to `gateway`.
/// 3. Dispatches `CheckoutFulfilled` or `CheckoutRejected` with the outcome.
///
/// Gateway failures never come back as `Err`: they end up in the returned state as
/// `CheckoutStatus::Error`. `Err` means the store itself could not be reached.
///
/// The store is not locked while the gateway call is pending. Actions dispatched in that
/// window are applied normally, and a successful checkout then clears them along with the
/// submitted items.
///
/// Dropping this future after step 1 leaves the cart in `Loading`; use [`spawn_checkout`]
/// when the caller may stop waiting.
#[instrument(skip_all)]
pub async fn run_checkout(
    store: &StoreClient<CartState>,
    gateway: &dyn CheckoutGateway,
    source: &dyn ItemsSource,
) -> Result<CartState, CartError> {
    store
        .dispatch(CartAction::CheckoutPending)
        .await
        .map_err(store_error)?;

    let outcome = match source.current_items().await {
        Ok(items) => {
            info!(products = items.len(), "Submitting checkout");
            match gateway.checkout(&items).await {
                Ok(response) => {
                    info!(success = response.success, "Gateway answered");
                    CartAction::CheckoutFulfilled(response)
                }
                Err(e) => {
                    warn!(error = %e, "Gateway failed");
                    CartAction::CheckoutRejected { message: e.message }
                }
            }
        }
        Err(e) => {
            warn!(error = %e, "Could not read items for checkout");
            CartAction::CheckoutRejected {
                message: Some(e.to_string()),
            }
        }
    };

    store.dispatch(outcome).await.map_err(store_error)
}

/// Starts [`run_checkout`] on its own task.
///
/// Once spawned, the checkout runs to completion whatever happens to the returned handle.
/// Dropping the handle, or a caller that stops waiting on it, cannot strand the cart in
/// `Loading`. The task keeps `store` alive until the gateway has answered.
pub fn spawn_checkout(
    store: StoreClient<CartState>,
    gateway: Arc<dyn CheckoutGateway>,
    source: Arc<dyn ItemsSource>,
) -> JoinHandle<Result<CartState, CartError>> {
    tokio::spawn(
        async move { run_checkout(&store, gateway.as_ref(), source.as_ref()).await }
            .in_current_span(),
    )
}
