//! Validation for carts being created.

use super::{ActionValidator, ValidationResult};
use crate::error::ValidationError;
use crate::lookup::ResourceLookup;
use crate::model::{CartResource, UpdateDirective};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Checks that the primary line item's product can be looked up and asks
/// the platform to recalculate the new cart.
///
/// A product that does not exist does not reject the cart; only a lookup
/// that fails to complete does.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreateValidator;

#[async_trait]
impl ActionValidator for CreateValidator {
    async fn validate(
        &self,
        resource: &CartResource,
        lookup: &dyn ResourceLookup,
    ) -> Result<ValidationResult, ValidationError> {
        let cart = resource.cart().map_err(|e| {
            warn!(error = %e, "Unreadable cart on create");
            ValidationError::internal(400, format!("Internal server error on cart create: {e}"))
        })?;

        if let Some(product_id) = cart.primary_line_item().and_then(|item| item.product_id()) {
            debug!(product_id, "Looking up product");
            match lookup.get_product(product_id).await {
                Ok(product) => debug!(product_id, found = product.is_some(), "Product lookup done"),
                Err(e) => {
                    warn!(product_id, error = %e, "Product lookup failed");
                    return Err(ValidationError::invalid_operation(format!(
                        "product lookup for {product_id} failed: {e}"
                    )));
                }
            }
        }

        Ok(ValidationResult::ok(vec![UpdateDirective::recalculate()]))
    }
}
