//! # Resource Lookup
//!
//! Read-only access to the two pieces of catalog data the validators need:
//! a product by ID and an inventory entry by SKU. Validators only see the
//! [`ResourceLookup`] trait; the backend is chosen at startup.
//!
//! - [`CatalogLookup`] reads from the in-memory catalog actors.
//! - [`PlatformLookup`] queries the commerce platform's HTTP API.
//!
//! Absence is not a failure: both operations return `Ok(None)` when nothing
//! matches. [`LookupError`] is reserved for lookups that could not complete.

pub mod catalog;
pub mod platform;

pub use catalog::CatalogLookup;
pub use platform::{PlatformConfig, PlatformLookup};

use crate::model::{InventoryEntry, Product};
use async_trait::async_trait;
use thiserror::Error;

/// A lookup that could not produce an answer.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LookupError {
    /// The backend reported the resource as missing in a way that is not a
    /// plain absence (for example a dangling reference).
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// Connection failure, timeout or unexpected status from the backend.
    #[error("{endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    /// The backend answered but the body did not have the expected shape.
    #[error("{endpoint} returned an unreadable body: {message}")]
    Decode { endpoint: String, message: String },
}

impl LookupError {
    pub fn transport(endpoint: impl Into<String>, message: impl ToString) -> Self {
        LookupError::Transport {
            endpoint: endpoint.into(),
            message: message.to_string(),
        }
    }

    pub fn decode(endpoint: impl Into<String>, message: impl ToString) -> Self {
        LookupError::Decode {
            endpoint: endpoint.into(),
            message: message.to_string(),
        }
    }
}

/// Read capability over products and inventory.
#[async_trait]
pub trait ResourceLookup: Send + Sync {
    /// Fetches a product by its platform ID.
    async fn get_product(&self, id: &str) -> Result<Option<Product>, LookupError>;

    /// Fetches the inventory entry whose SKU matches `sku` exactly.
    async fn get_inventory_entry(&self, sku: &str) -> Result<Option<InventoryEntry>, LookupError>;
}
