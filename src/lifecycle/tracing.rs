//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter filtered by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: start, and shutdown with the number of applied actions
//! - **Actions**: every dispatch at `debug` with the full action
//! - **Checkout**: status changes at `info`, gateway outcomes, failures at `warn`
//! - **Client calls**: one span per [`CartClient`](crate::clients::CartClient) method
//!
//! ## Usage Examples
//!
//! ```bash
//! # Status changes and gateway outcomes
//! RUST_LOG=info cargo run
//!
//! # Every dispatched action with its payload
//! RUST_LOG=debug cargo run
//!
//! # Only the checkout lifecycle
//! RUST_LOG=cart_store::checkout=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! Status changes are logged from the store task, outside the caller's spans.
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Store started state_type="CartState"
//! INFO Checkout status changed from=READY to=LOADING
//! INFO checkout:begin_checkout_with_current:run_checkout: Submitting checkout products=2
//! INFO checkout:begin_checkout_with_current:run_checkout: Gateway answered success=true
//! INFO Checkout status changed from=LOADING to=READY
//! INFO Shutdown state_type="CartState" applied=8
//! ```

/// Installs the global subscriber. Panics if one is already installed.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - spans already say where we are
        .compact() // Compact format shows spans inline (e.g., "begin_checkout:run_checkout")
        .init();
}

/// Like [`setup_tracing`], but reports an already-installed subscriber instead of panicking.
pub fn try_setup_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init()
}
