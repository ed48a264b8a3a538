use crate::clients::{InventoryClient, ProductClient};
use crate::inventory_actor::InventoryError;
use crate::lookup::CatalogLookup;
use crate::model::{InventoryEntryCreate, ProductCreate};
use crate::product_actor::ProductError;
use serde::Deserialize;
use std::path::Path;
use tracing::{error, info};

/// Products and inventory entries to load into a fresh catalog.
///
/// ```json
/// {
///   "products": [{ "id": "P1", "key": "widget", "name": "Widget" }],
///   "inventory": [{ "sku": "ABC", "quantityOnStock": 10, "availableQuantity": 3 }]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub products: Vec<ProductCreate>,
    #[serde(default)]
    pub inventory: Vec<InventoryEntryCreate>,
}

impl CatalogSeed {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SystemError> {
        let path = path.as_ref();
        let seed_error = |message: String| SystemError::SeedFile {
            path: path.display().to_string(),
            message,
        };
        let raw = std::fs::read_to_string(path).map_err(|e| seed_error(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| seed_error(e.to_string()))
    }

    pub fn from_json(raw: &str) -> Result<Self, SystemError> {
        serde_json::from_str(raw).map_err(|e| SystemError::SeedFile {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Errors raised while starting, seeding or stopping the catalog.
#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    #[error("Cannot read catalog seed {path}: {message}")]
    SeedFile { path: String, message: String },

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("Actor task failed: {0}")]
    ActorTask(String),
}

/// The in-memory catalog: one actor for products, one for inventory.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new();
/// system.seed(&CatalogSeed::from_file("catalog.json")?).await?;
///
/// let state = AppState::new(Arc::new(system.lookup()));
/// // ... serve requests ...
///
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Client for interacting with the Inventory actor
    pub inventory_client: InventoryClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogSystem {
    /// Spawns both catalog actors. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (product_actor, product_client) = crate::product_actor::new();
        let (inventory_actor, inventory_client) = crate::inventory_actor::new();

        let product_handle = tokio::spawn(product_actor.run());
        let inventory_handle = tokio::spawn(inventory_actor.run());

        Self {
            product_client,
            inventory_client,
            handles: vec![product_handle, inventory_handle],
        }
    }

    /// A [`CatalogLookup`] reading from this catalog.
    pub fn lookup(&self) -> CatalogLookup {
        CatalogLookup::new(self.product_client.clone(), self.inventory_client.clone())
    }

    /// Loads every product and inventory entry in `seed`.
    pub async fn seed(&self, seed: &CatalogSeed) -> Result<(), SystemError> {
        for product in &seed.products {
            self.product_client.create_product(product.clone()).await?;
        }
        for entry in &seed.inventory {
            self.inventory_client.create_entry(entry.clone()).await?;
        }
        info!(
            products = seed.products.len(),
            inventory = seed.inventory.len(),
            "Catalog seeded"
        );
        Ok(())
    }

    /// Gracefully shuts down the catalog.
    ///
    /// Dropping the clients closes the actors' channels; each actor finishes
    /// its loop once every outstanding clone (including those held by
    /// lookups) is gone.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down catalog...");

        drop(self.product_client);
        drop(self.inventory_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::ActorTask(e.to_string()));
            }
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}

impl Default for CatalogSystem {
    fn default() -> Self {
        Self::new()
    }
}
