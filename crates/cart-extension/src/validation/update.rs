//! Validation for carts being updated: stock check on the primary line item.

use super::{ActionValidator, ValidationResult};
use crate::error::ValidationError;
use crate::lookup::ResourceLookup;
use crate::model::CartResource;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Rejects the update when the primary line item's SKU has no inventory
/// entry or not enough available stock. Produces no directives.
#[derive(Debug, Default, Clone, Copy)]
pub struct UpdateValidator;

#[async_trait]
impl ActionValidator for UpdateValidator {
    async fn validate(
        &self,
        resource: &CartResource,
        lookup: &dyn ResourceLookup,
    ) -> Result<ValidationResult, ValidationError> {
        let cart = resource.cart().map_err(|e| {
            warn!(error = %e, "Unreadable cart on update");
            ValidationError::internal(500, format!("Internal server error on cart update: {e}"))
        })?;

        let Some(item) = cart.primary_line_item() else {
            return Ok(ValidationResult::ok(Vec::new()));
        };
        let Some(sku) = item.sku() else {
            return Ok(ValidationResult::ok(Vec::new()));
        };
        let quantity = item.quantity;

        debug!(sku, quantity, "Checking inventory");
        let entry = lookup.get_inventory_entry(sku).await.map_err(|e| {
            warn!(sku, error = %e, "Inventory lookup failed");
            ValidationError::internal(500, format!("inventory lookup for {sku} failed: {e}"))
        })?;

        let Some(entry) = entry else {
            warn!(sku, "No inventory entry");
            return Err(ValidationError::invalid_operation(format!(
                "inventory entry not found for {sku}"
            )));
        };

        if entry.is_short_of(quantity) {
            warn!(sku, quantity, available = entry.available_quantity, "Insufficient stock");
            return Err(ValidationError::invalid_operation(format!(
                "stock level for {sku} is less than {quantity}"
            )));
        }

        Ok(ValidationResult::ok(Vec::new()))
    }
}
