//! # Inventory Actor
//!
//! Serves stock levels keyed by SKU. The update validator reads from here
//! when the extension runs against the in-memory catalog.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::InventoryClient;
use crate::model::InventoryEntry;
use catalog_framework::ResourceActor;

/// Creates a new Inventory actor and its client.
pub fn new() -> (ResourceActor<InventoryEntry>, InventoryClient) {
    let (actor, generic_client) = ResourceActor::new(64);
    (actor, InventoryClient::new(generic_client))
}
