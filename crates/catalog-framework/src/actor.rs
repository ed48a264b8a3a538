//! # Generic Actor Server
//!
//! The `ResourceActor` owns one catalog store and processes requests for it
//! sequentially, so the store needs no locking.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// ## ResourceActor
///
/// The server side of a catalog store. It owns the `HashMap` of records for
/// one entity type `T: ActorEntity` and processes incoming `ResourceRequest<T>`
/// messages one at a time inside its own Tokio task.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the `actor` (server) and `client` (interface).
/// 2.  **Run**: spawn `actor.run()` in a background task.
/// 3.  **Stop**: drop every clone of the client; the loop exits when the channel closes.
///
/// ```rust
/// use catalog_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Shelf { code: String, units: u32 }
/// #[derive(Debug)] struct ShelfCreate { code: String, units: u32 }
/// #[derive(Debug)] struct ShelfUpdate { units: u32 }
/// #[derive(Debug, thiserror::Error)] #[error("shelf error")] struct ShelfError;
///
/// #[async_trait]
/// impl ActorEntity for Shelf {
///     type Id = String;
///     type Create = ShelfCreate;
///     type Update = ShelfUpdate;
///     type Error = ShelfError;
///
///     fn id(&self) -> &String { &self.code }
///     fn from_create_params(p: ShelfCreate) -> Result<Self, Self::Error> {
///         Ok(Self { code: p.code, units: p.units })
///     }
///     async fn on_update(&mut self, u: ShelfUpdate) -> Result<(), Self::Error> {
///         self.units = u.units;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Shelf>::new(10);
///     tokio::spawn(actor.run());
///
///     let id = client.create(ShelfCreate { code: "A1".into(), units: 4 }).await.unwrap();
///     let shelf = client.get(id).await.unwrap().unwrap();
///     assert_eq!(shelf.units, 4);
/// }
/// ```
///
/// ## Operations
///
/// * **Create**: builds the record, runs `on_create`, and stores it under
///   [`ActorEntity::id`]. A key that is already present is rejected with
///   [`FrameworkError::AlreadyExists`].
/// * **Get**: returns a clone of the record, or `None`.
/// * **Update**: runs `on_update` on the stored record and returns the new state.
/// * **Delete**: runs `on_delete`, then removes the record.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait
    /// when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        // Just the type name, e.g. "Product" instead of "cart_extension::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let _ = respond_to.send(self.handle_create(entity_type, params).await);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete().await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn handle_create(
        &mut self,
        entity_type: &str,
        params: T::Create,
    ) -> Result<T::Id, FrameworkError> {
        let mut item = T::from_create_params(params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            FrameworkError::EntityError(Box::new(e))
        })?;

        let id = item.id().clone();
        if self.store.contains_key(&id) {
            warn!(entity_type, %id, "Already exists");
            return Err(FrameworkError::AlreadyExists(id.to_string()));
        }

        if let Err(e) = item.on_create().await {
            warn!(entity_type, %id, error = %e, "on_create failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }

        self.store.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }
}
