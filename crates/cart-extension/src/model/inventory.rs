use serde::{Deserialize, Serialize};

/// Stock record for one SKU.
///
/// `available_quantity` is signed: the platform lets it go negative when
/// reservations exceed what is on stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryEntry {
    pub sku: String,
    pub available_quantity: i64,
    #[serde(default)]
    pub quantity_on_stock: i64,
}

impl InventoryEntry {
    pub fn new(sku: impl Into<String>, available_quantity: i64) -> Self {
        Self {
            sku: sku.into(),
            available_quantity,
            quantity_on_stock: available_quantity,
        }
    }

    /// True when `quantity` units cannot be served from available stock.
    pub fn is_short_of(&self, quantity: u64) -> bool {
        i64::try_from(quantity).map_or(true, |q| self.available_quantity < q)
    }
}

/// Payload for registering an inventory entry. `available_quantity`
/// defaults to `quantity_on_stock` when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryEntryCreate {
    pub sku: String,
    pub quantity_on_stock: i64,
    #[serde(default)]
    pub available_quantity: Option<i64>,
}

#[derive(Debug, Clone)]
pub enum InventoryEntryUpdate {
    /// Overwrite the available quantity, e.g. after a reservation elsewhere.
    SetAvailableQuantity(i64),
    /// Receive `quantity` more units; both counters grow.
    Restock(i64),
}
