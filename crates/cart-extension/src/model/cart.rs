//! Cart payloads as the commerce platform sends them to the extension.
//!
//! Only the fields the validators read are modelled; everything else in the
//! platform's cart representation is ignored on decode.

use serde::{Deserialize, Serialize};

/// Resource reference carried in an extension request: `{typeId, id, obj}`.
///
/// `obj` is kept as raw JSON so that the boundary can route on `type_id`
/// before committing to a cart shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResource {
    pub type_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub obj: serde_json::Value,
}

impl CartResource {
    /// Wraps a cart as a `"cart"` resource.
    pub fn from_cart(cart: &Cart) -> Result<Self, serde_json::Error> {
        Ok(Self {
            type_id: "cart".to_string(),
            id: None,
            obj: serde_json::to_value(cart)?,
        })
    }

    /// Decodes `obj` into a [`Cart`].
    pub fn cart(&self) -> Result<Cart, serde_json::Error> {
        Cart::deserialize(&self.obj)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

impl Cart {
    /// The line item the validators inspect.
    ///
    /// Validation deliberately looks at the first line item only; further
    /// items in a multi-item cart are not checked.
    pub fn primary_line_item(&self) -> Option<&LineItem> {
        self.line_items.first()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
    #[serde(default)]
    pub quantity: u64,
}

impl LineItem {
    /// The product ID, if set and non-empty.
    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref().filter(|id| !id.is_empty())
    }

    /// The variant's SKU, if set and non-empty.
    pub fn sku(&self) -> Option<&str> {
        self.variant
            .as_ref()
            .and_then(|v| v.sku.as_deref())
            .filter(|sku| !sku.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_platform_cart_and_ignores_extra_fields() {
        let resource: CartResource = serde_json::from_value(json!({
            "typeId": "cart",
            "id": "cart-1",
            "obj": {
                "version": 3,
                "cartState": "Active",
                "lineItems": [
                    {
                        "id": "li-1",
                        "productId": "P1",
                        "variant": { "id": 1, "sku": "ABC" },
                        "quantity": 5
                    },
                    { "productId": "P2", "variant": { "sku": "DEF" }, "quantity": 1 }
                ]
            }
        }))
        .unwrap();

        let cart = resource.cart().unwrap();
        let item = cart.primary_line_item().unwrap();
        assert_eq!(item.product_id.as_deref(), Some("P1"));
        assert_eq!(item.sku(), Some("ABC"));
        assert_eq!(item.quantity, 5);
        assert_eq!(cart.line_items.len(), 2);
    }

    #[test]
    fn missing_line_items_is_an_empty_cart() {
        let resource: CartResource =
            serde_json::from_value(json!({ "typeId": "cart", "obj": {} })).unwrap();
        assert!(resource.cart().unwrap().primary_line_item().is_none());
    }

    #[test]
    fn missing_obj_is_rejected() {
        let resource: CartResource = serde_json::from_value(json!({ "typeId": "cart" })).unwrap();
        assert!(resource.cart().is_err());
    }

    #[test]
    fn line_item_without_variant_has_no_sku() {
        let item = LineItem {
            product_id: Some("P1".to_string()),
            ..Default::default()
        };
        assert_eq!(item.sku(), None);
    }

    #[test]
    fn from_cart_wraps_as_cart_resource() {
        let cart = Cart {
            line_items: vec![LineItem {
                product_id: Some("P1".to_string()),
                variant: Some(Variant {
                    sku: Some("ABC".to_string()),
                }),
                quantity: 2,
            }],
        };
        let resource = CartResource::from_cart(&cart).unwrap();
        assert_eq!(resource.type_id, "cart");
        assert_eq!(resource.obj["lineItems"][0]["variant"]["sku"], "ABC");
        assert_eq!(resource.cart().unwrap(), cart);
    }

    #[test]
    fn empty_identifiers_count_as_absent() {
        let item = LineItem {
            product_id: Some(String::new()),
            variant: Some(Variant {
                sku: Some(String::new()),
            }),
            quantity: 1,
        };
        assert_eq!(item.product_id(), None);
        assert_eq!(item.sku(), None);
    }
}
