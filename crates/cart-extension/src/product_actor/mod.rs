//! # Product Actor
//!
//! Serves the in-memory product catalog, keyed by platform product ID.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](catalog_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use cart_extension::product_actor;
//! use cart_extension::model::ProductCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new();
//!     tokio::spawn(actor.run());
//!
//!     let id = client
//!         .create_product(ProductCreate { id: "P1".into(), key: None, name: None })
//!         .await?;
//!     assert!(client.get_product(&id).await?.is_some());
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use catalog_framework::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new() -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, ProductClient::new(generic_client))
}
