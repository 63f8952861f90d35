//! # Framework Errors
//!
//! Common error types used by the store actor and its clients.

/// Errors that can occur within the store framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Reducer error: {0}")]
    ReducerError(Box<dyn std::error::Error + Send + Sync>),
}
