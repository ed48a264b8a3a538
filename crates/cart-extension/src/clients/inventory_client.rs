//! # Inventory Client
//!
//! High-level API over the `InventoryEntry` actor: registration, lookup by
//! SKU, and stock adjustments.
use crate::inventory_actor::InventoryError;
use crate::model::{InventoryEntry, InventoryEntryCreate, InventoryEntryUpdate};
use async_trait::async_trait;
use catalog_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<InventoryEntry>,
}

impl InventoryClient {
    pub fn new(inner: ResourceClient<InventoryEntry>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<InventoryEntry> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &ResourceClient<InventoryEntry> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(sku) => InventoryError::NotFound(sku),
            FrameworkError::AlreadyExists(sku) => InventoryError::AlreadyExists(sku),
            FrameworkError::EntityError(inner) => match inner.downcast::<InventoryError>() {
                Ok(err) => *err,
                Err(other) => InventoryError::ActorCommunicationError(other.to_string()),
            },
            other => InventoryError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl InventoryClient {
    #[instrument(skip(self))]
    pub async fn create_entry(&self, params: InventoryEntryCreate) -> Result<String, InventoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Exact-match lookup by SKU.
    #[instrument(skip(self))]
    pub async fn get_entry(&self, sku: &str) -> Result<Option<InventoryEntry>, InventoryError> {
        self.get(sku.to_string()).await
    }

    /// Overwrites the available quantity of `sku`.
    #[instrument(skip(self))]
    pub async fn set_available_quantity(
        &self,
        sku: &str,
        available: i64,
    ) -> Result<InventoryEntry, InventoryError> {
        debug!("Sending request");
        self.inner
            .update(
                sku.to_string(),
                InventoryEntryUpdate::SetAvailableQuantity(available),
            )
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn restock(&self, sku: &str, quantity: i64) -> Result<InventoryEntry, InventoryError> {
        debug!("Sending request");
        self.inner
            .update(sku.to_string(), InventoryEntryUpdate::Restock(quantity))
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_framework::mock::{create_mock_client, MockClient};
    use catalog_framework::ResourceRequest;

    #[tokio::test]
    async fn test_set_available_quantity_sends_update() {
        let (client, mut receiver) = create_mock_client::<InventoryEntry>(10);
        let inventory_client = InventoryClient::new(client);

        let task =
            tokio::spawn(async move { inventory_client.set_available_quantity("ABC", 7).await });

        match receiver.recv().await {
            Some(ResourceRequest::Update {
                id,
                update,
                respond_to,
            }) => {
                assert_eq!(id, "ABC");
                assert!(matches!(update, InventoryEntryUpdate::SetAvailableQuantity(7)));
                respond_to.send(Ok(InventoryEntry::new("ABC", 7))).unwrap();
            }
            _ => panic!("Expected Update request"),
        }

        let entry = task.await.unwrap().unwrap();
        assert_eq!(entry.available_quantity, 7);
    }

    #[tokio::test]
    async fn test_get_entry_uses_exact_sku() {
        let mut mock = MockClient::<InventoryEntry>::new();
        mock.expect_get("ABC".to_string())
            .return_ok(Some(InventoryEntry::new("ABC", 3)));

        let client = InventoryClient::new(mock.client());
        let entry = client.get_entry("ABC").await.unwrap().unwrap();
        assert_eq!(entry.available_quantity, 3);
        mock.verify();
    }

    #[tokio::test]
    async fn test_restock_unknown_sku() {
        let mut mock = MockClient::<InventoryEntry>::new();
        mock.expect_update("XYZ".to_string())
            .return_err(FrameworkError::NotFound("XYZ".to_string()));

        let client = InventoryClient::new(mock.client());
        let result = client.restock("XYZ", 5).await;
        assert_eq!(result, Err(InventoryError::NotFound("XYZ".to_string())));
    }
}
