//! [`ResourceLookup`] over the in-memory catalog actors.

use super::{LookupError, ResourceLookup};
use crate::clients::{InventoryClient, ProductClient};
use crate::inventory_actor::InventoryError;
use crate::model::{InventoryEntry, Product};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct CatalogLookup {
    products: ProductClient,
    inventory: InventoryClient,
}

impl CatalogLookup {
    pub fn new(products: ProductClient, inventory: InventoryClient) -> Self {
        Self {
            products,
            inventory,
        }
    }
}

#[async_trait]
impl ResourceLookup for CatalogLookup {
    #[instrument(skip(self))]
    async fn get_product(&self, id: &str) -> Result<Option<Product>, LookupError> {
        let product = self
            .products
            .get_product(id)
            .await
            .map_err(product_error)?;
        debug!(found = product.is_some(), "Product lookup");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_inventory_entry(&self, sku: &str) -> Result<Option<InventoryEntry>, LookupError> {
        let entry = self
            .inventory
            .get_entry(sku)
            .await
            .map_err(inventory_error)?;
        debug!(found = entry.is_some(), "Inventory lookup");
        Ok(entry)
    }
}

fn product_error(e: ProductError) -> LookupError {
    match e {
        ProductError::NotFound(id) => LookupError::NotFound {
            resource: "product",
            id,
        },
        other => LookupError::transport("product catalog", other),
    }
}

fn inventory_error(e: InventoryError) -> LookupError {
    match e {
        InventoryError::NotFound(id) => LookupError::NotFound {
            resource: "inventory entry",
            id,
        },
        other => LookupError::transport("inventory catalog", other),
    }
}
