//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every catalog record (products,
//! inventory entries, ...) implements to be held by a [`ResourceActor`](crate::ResourceActor).
//!
//! Unlike a database-backed store, the catalog never generates keys: each
//! record arrives with the identifier the commerce platform already uses for
//! it (a product ID, a SKU), and [`ActorEntity::id`] exposes that key to the
//! actor.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any catalog record must implement to be managed by `ResourceActor`.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The natural key of the record (e.g. product ID, SKU).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing record.
    type Update: Send + Sync + Debug;

    /// The error type for this record.
    ///
    /// One error enum per record type, shared by every hook.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The key this record is stored under.
    fn id(&self) -> &Self::Id;

    /// Construct the record from its creation payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the record is constructed and before it is stored.
    async fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Called immediately before the record is removed.
    async fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}
