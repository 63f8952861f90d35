//! # Cart Store Demo
//!
//! Drives the cart through a typical storefront session:
//! 1.  Start the [`CartSystem`] with a simulated checkout gateway.
//! 2.  Add, adjust and remove products, reading totals through memoized selectors.
//! 3.  Check out the current cart.

use cart_store::checkout::SimulatedGateway;
use cart_store::lifecycle::{setup_tracing, CartConfig, CartSystem};
use cart_store::model::{catalog_from_products, Product};
use cart_store::selectors::CartSelectors;
use std::sync::Arc;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = CartConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting cart demo");

    let gateway = Arc::new(SimulatedGateway::approving(config.gateway_latency()));
    let system = CartSystem::new(&config, gateway).map_err(|e| e.to_string())?;

    let catalog = Arc::new(catalog_from_products(vec![
        Product::new("p1", "Espresso Beans", 14.5),
        Product::new("p2", "Ceramic Mug", 9.99),
        Product::new("p3", "Milk Frother", 29.0),
    ]));
    let selectors = CartSelectors::new();
    let cart = &system.cart_client;

    let span = tracing::info_span!("shopping");
    let state = async {
        cart.add_to_cart("p1").await?;
        cart.add_to_cart("p1").await?;
        cart.add_to_cart("p2").await?;
        cart.add_to_cart("p3").await?;
        cart.update_quantity("p2", 3).await?;
        cart.remove_from_cart("p3").await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let total_price = selectors
        .total_price(&state, &catalog)
        .map_err(|e| e.to_string())?;
    info!(
        count = selectors.total_count(&state),
        total = %total_price,
        "Cart ready for checkout"
    );

    let span = tracing::info_span!("checkout");
    let state = cart
        .begin_checkout_with_current()
        .instrument(span)
        .await
        .map_err(|e| e.to_string())?;

    info!(
        status = %state.checkout_status,
        count = selectors.total_count(&state),
        error = %state.error_message,
        "Checkout finished"
    );

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
