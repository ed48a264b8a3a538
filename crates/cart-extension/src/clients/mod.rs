//! Type-safe wrappers around [`ResourceClient`](catalog_framework::ResourceClient).

pub mod inventory_client;
pub mod product_client;

pub use inventory_client::*;
pub use product_client::*;
