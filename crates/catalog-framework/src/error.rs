//! # Framework Errors
//!
//! Errors raised by the store actors and their clients. Entity-specific
//! failures travel inside [`FrameworkError::EntityError`] so callers can
//! still inspect the original error.

/// Errors that can occur within the catalog framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
