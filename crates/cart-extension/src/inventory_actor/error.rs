//! Error types for the Inventory actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("SKU must not be empty")]
    EmptySku,

    /// Stock on hand cannot be negative; availability can.
    #[error("Invalid quantity on stock for {sku}: {quantity}")]
    InvalidQuantityOnStock { sku: String, quantity: i64 },

    #[error("Inventory entry already exists: {0}")]
    AlreadyExists(String),

    #[error("Inventory entry not found: {0}")]
    NotFound(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
