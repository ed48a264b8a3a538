//! [`ActorEntity`] implementation for [`Product`].

use super::ProductError;
use crate::model::{Product, ProductCreate, ProductUpdate};
use async_trait::async_trait;
use catalog_framework::ActorEntity;

#[async_trait]
impl ActorEntity for Product {
    type Id = String;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Error = ProductError;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(params: ProductCreate) -> Result<Self, ProductError> {
        if params.id.trim().is_empty() {
            return Err(ProductError::EmptyId);
        }
        Ok(Self {
            id: params.id,
            key: params.key,
            name: params.name,
        })
    }

    /// Applies the fields present in `update`; absent fields are kept.
    async fn on_update(&mut self, update: ProductUpdate) -> Result<(), ProductError> {
        if let Some(key) = update.key {
            self.key = Some(key);
        }
        if let Some(name) = update.name {
            self.name = Some(name);
        }
        Ok(())
    }
}
