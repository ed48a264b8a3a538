use serde::{Deserialize, Serialize};

/// An instruction returned to the platform for it to apply to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum UpdateDirective {
    /// Recompute prices and totals of the cart.
    #[serde(rename_all = "camelCase")]
    Recalculate { update_product_data: bool },
}

impl UpdateDirective {
    /// `Recalculate` without refreshing product data.
    pub fn recalculate() -> Self {
        UpdateDirective::Recalculate {
            update_product_data: false,
        }
    }
}
