//! # ActorClient Trait
//!
//! Common interface for record-specific clients (`ProductClient`,
//! `InventoryClient`, ...): default `get` and `delete` built on top of the
//! wrapped `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for record-specific clients to inherit the read and delete operations.
///
/// # Example
///
/// ```rust
/// use catalog_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Sku { code: String }
/// #[derive(Debug)] struct SkuCreate { code: String }
/// #[derive(Debug)] struct SkuUpdate;
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct SkuError(String);
///
/// #[async_trait]
/// impl ActorEntity for Sku {
///     type Id = String;
///     type Create = SkuCreate;
///     type Update = SkuUpdate;
///     type Error = SkuError;
///
///     fn id(&self) -> &String { &self.code }
///     fn from_create_params(params: SkuCreate) -> Result<Self, Self::Error> {
///         Ok(Self { code: params.code })
///     }
///     async fn on_update(&mut self, _: SkuUpdate) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct SkuClient { inner: ResourceClient<Sku> }
///
/// #[async_trait]
/// impl ActorClient<Sku> for SkuClient {
///     type Error = SkuError;
///     fn inner(&self) -> &ResourceClient<Sku> { &self.inner }
///     fn map_error(e: FrameworkError) -> Self::Error { SkuError(e.to_string()) }
/// }
///
/// async fn usage(client: SkuClient) {
///     // get() and delete() are provided automatically
///     let _ = client.get("SKU-1".to_string()).await;
///     let _ = client.delete("SKU-1".to_string()).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The record-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the record-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by key.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete a record by key.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
