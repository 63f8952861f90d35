//! # StoreHandle Trait
//!
//! Provides a common interface for domain-specific store clients, adding default `snapshot`
//! and `dispatch` methods built on top of a generic `StoreClient`.

use crate::framework::{FrameworkError, Reducer, StoreClient};
use async_trait::async_trait;

/// Trait for domain clients to inherit the standard store operations.
///
/// Implementors only say where the inner client lives and how framework errors become
/// domain errors; `snapshot` and `dispatch` come for free.
#[async_trait]
pub trait StoreHandle<S: Reducer>: Send + Sync {
    /// The domain-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<S>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch the current state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<S, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Apply an action and return the resulting state.
    #[tracing::instrument(skip(self))]
    async fn dispatch(&self, action: S::Action) -> Result<S, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().dispatch(action).await.map_err(Self::map_error)
    }
}
