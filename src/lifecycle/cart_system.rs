use crate::cart;
use crate::checkout::CheckoutGateway;
use crate::clients::CartClient;
use crate::lifecycle::config::{CartConfig, ConfigError};
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the cart.
///
/// `CartSystem` is responsible for:
/// - **Lifecycle Management**: starting the cart store actor and stopping it
/// - **Dependency Wiring**: handing the checkout gateway to the [`CartClient`]
///
/// # Example
///
/// ```ignore
/// let gateway = Arc::new(SimulatedGateway::approving(config.gateway_latency()));
/// let system = CartSystem::new(&config, gateway)?;
///
/// system.cart_client.add_to_cart("p1").await?;
/// system.cart_client.begin_checkout_with_current().await?;
///
/// system.shutdown().await?;
/// ```
pub struct CartSystem {
    /// Client for interacting with the cart store
    pub cart_client: CartClient,

    /// Task handle for the store actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl CartSystem {
    /// Spawns the cart store actor with an empty cart and wires `gateway` into its client.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &CartConfig, gateway: Arc<dyn CheckoutGateway>) -> Result<Self, ConfigError> {
        config.validate()?;

        let (actor, store) = cart::new(config.buffer_size);
        let handle = tokio::spawn(actor.run());
        info!(buffer_size = config.buffer_size, "Cart system started");

        Ok(Self {
            cart_client: CartClient::new(store, gateway),
            handle,
        })
    }

    /// Gracefully shuts down the cart store.
    ///
    /// Drops this system's client, which closes the store's channel once no other
    /// [`CartClient`] clones remain, then waits for the actor task to finish.
    /// A checkout still waiting on the gateway holds a client, so shutdown waits for it.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cart system...");

        drop(self.cart_client);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("Cart system shutdown complete.");
        Ok(())
    }
}
