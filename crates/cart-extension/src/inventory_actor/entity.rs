//! [`ActorEntity`] implementation for [`InventoryEntry`], keyed by SKU.

use super::InventoryError;
use crate::model::{InventoryEntry, InventoryEntryCreate, InventoryEntryUpdate};
use async_trait::async_trait;
use catalog_framework::ActorEntity;

#[async_trait]
impl ActorEntity for InventoryEntry {
    type Id = String;
    type Create = InventoryEntryCreate;
    type Update = InventoryEntryUpdate;
    type Error = InventoryError;

    fn id(&self) -> &String {
        &self.sku
    }

    fn from_create_params(params: InventoryEntryCreate) -> Result<Self, InventoryError> {
        if params.sku.trim().is_empty() {
            return Err(InventoryError::EmptySku);
        }
        if params.quantity_on_stock < 0 {
            return Err(InventoryError::InvalidQuantityOnStock {
                sku: params.sku,
                quantity: params.quantity_on_stock,
            });
        }
        Ok(Self {
            available_quantity: params.available_quantity.unwrap_or(params.quantity_on_stock),
            quantity_on_stock: params.quantity_on_stock,
            sku: params.sku,
        })
    }

    async fn on_update(&mut self, update: InventoryEntryUpdate) -> Result<(), InventoryError> {
        match update {
            InventoryEntryUpdate::SetAvailableQuantity(available) => {
                self.available_quantity = available;
            }
            InventoryEntryUpdate::Restock(quantity) => {
                if quantity < 0 {
                    return Err(InventoryError::InvalidQuantityOnStock {
                        sku: self.sku.clone(),
                        quantity,
                    });
                }
                self.quantity_on_stock = self.quantity_on_stock.saturating_add(quantity);
                self.available_quantity = self.available_quantity.saturating_add(quantity);
            }
        }
        Ok(())
    }
}
