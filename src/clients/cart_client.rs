//! # Cart Client
//!
//! High-level API for the cart store. Wraps a `StoreClient<CartState>` together with the
//! checkout gateway and exposes the operations a storefront UI calls.

use crate::cart::{CartAction, CartError};
use crate::checkout::{spawn_checkout, CheckoutGateway, FixedItems, ItemsSource};
use crate::framework::{FrameworkError, StoreClient, StoreHandle};
use crate::model::{CartItems, CartState, CheckoutStatus, ProductId};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for interacting with the cart store.
#[derive(Clone)]
pub struct CartClient {
    inner: StoreClient<CartState>,
    gateway: Arc<dyn CheckoutGateway>,
}

#[async_trait]
impl StoreHandle<CartState> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &StoreClient<CartState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CartError::StoreCommunication(e.to_string())
    }
}

#[async_trait]
impl ItemsSource for CartClient {
    async fn current_items(&self) -> Result<Arc<CartItems>, CartError> {
        self.items().await
    }
}

impl CartClient {
    pub fn new(inner: StoreClient<CartState>, gateway: Arc<dyn CheckoutGateway>) -> Self {
        Self { inner, gateway }
    }

    #[instrument(skip(self, id))]
    pub async fn add_to_cart(&self, id: impl Into<ProductId>) -> Result<CartState, CartError> {
        let id = id.into();
        debug!(%id, "add_to_cart called");
        self.dispatch(CartAction::AddToCart(id)).await
    }

    #[instrument(skip(self, id))]
    pub async fn remove_from_cart(&self, id: impl Into<ProductId>) -> Result<CartState, CartError> {
        let id = id.into();
        debug!(%id, "remove_from_cart called");
        self.dispatch(CartAction::RemoveFromCart(id)).await
    }

    /// Stores `quantity` as given; zero or negative does not remove the product.
    #[instrument(skip(self, id))]
    pub async fn update_quantity(
        &self,
        id: impl Into<ProductId>,
        quantity: i64,
    ) -> Result<CartState, CartError> {
        let id = id.into();
        debug!(%id, "update_quantity called");
        self.dispatch(CartAction::UpdateQuantity { id, quantity }).await
    }

    /// Current state; same as [`StoreHandle::snapshot`].
    pub async fn state(&self) -> Result<CartState, CartError> {
        self.snapshot().await
    }

    pub async fn items(&self) -> Result<Arc<CartItems>, CartError> {
        Ok(self.snapshot().await?.items)
    }

    pub async fn checkout_status(&self) -> Result<CheckoutStatus, CartError> {
        Ok(self.snapshot().await?.checkout_status)
    }

    pub async fn error_message(&self) -> Result<String, CartError> {
        Ok(self.snapshot().await?.error_message)
    }

    /// Checks out the given items.
    ///
    /// The returned state is the one right after the gateway outcome was applied. Gateway
    /// failures show up there as `CheckoutStatus::Error`; `Err` only means the store was
    /// unreachable or the checkout task died.
    ///
    /// The checkout runs on its own task: dropping this future only stops waiting for it.
    #[instrument(skip(self, items), fields(products = items.len()))]
    pub async fn begin_checkout(&self, items: CartItems) -> Result<CartState, CartError> {
        debug!(?items, "begin_checkout called");
        let source = Arc::new(FixedItems(Arc::new(items)));
        self.checkout_from(source).await
    }

    /// Checks out whatever is in the cart once the checkout has started.
    #[instrument(skip(self))]
    pub async fn begin_checkout_with_current(&self) -> Result<CartState, CartError> {
        self.checkout_from(Arc::new(self.clone())).await
    }

    async fn checkout_from(&self, source: Arc<dyn ItemsSource>) -> Result<CartState, CartError> {
        spawn_checkout(self.inner.clone(), self.gateway.clone(), source)
            .await
            .map_err(|e| CartError::CheckoutTask(e.to_string()))?
    }
}
