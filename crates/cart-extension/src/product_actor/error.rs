//! Error types for the Product actor.

use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// Product IDs are assigned by the platform and must be non-empty.
    #[error("Product id must not be empty")]
    EmptyId,

    /// A product with this ID is already in the catalog.
    #[error("Product already exists: {0}")]
    AlreadyExists(String),

    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
