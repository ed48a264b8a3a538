//! # Catalog Framework
//!
//! Building blocks for in-memory, concurrently accessed catalog stores. Each
//! store is an actor: a Tokio task that exclusively owns a `HashMap` of
//! records and serves Create / Get / Update / Delete requests sent over a
//! channel by cloneable clients.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the record type, its key, and its lifecycle hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and ownership of the store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe async access
//!
//! Records carry their own natural key ([`ActorEntity::id`]): a catalog
//! mirrors identifiers assigned elsewhere (product IDs, SKUs) and never mints
//! new ones.
//!
//! ## Example
//!
//! ```rust
//! use catalog_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Stock { sku: String, available: i64 }
//! #[derive(Debug)] struct StockCreate { sku: String, available: i64 }
//! #[derive(Debug)] struct StockUpdate { available: i64 }
//! #[derive(Debug, thiserror::Error)] #[error("stock error")] struct StockError;
//!
//! #[async_trait]
//! impl ActorEntity for Stock {
//!     type Id = String;
//!     type Create = StockCreate;
//!     type Update = StockUpdate;
//!     type Error = StockError;
//!
//!     fn id(&self) -> &String { &self.sku }
//!     fn from_create_params(p: StockCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { sku: p.sku, available: p.available })
//!     }
//!     async fn on_update(&mut self, u: StockUpdate) -> Result<(), Self::Error> {
//!         self.available = u.available;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Stock>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     let sku = client.create(StockCreate { sku: "ABC".into(), available: 3 }).await.unwrap();
//!     client.update(sku.clone(), StockUpdate { available: 7 }).await.unwrap();
//!     assert_eq!(client.get(sku).await.unwrap().unwrap().available, 7);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Requests to one actor are processed **sequentially**; no locks guard the store
//! - Different actors run in **parallel**
//!
//! ## Testing
//!
//! [`mock::MockClient`] serves a `ResourceClient<T>` from scripted
//! expectations instead of a running actor. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
