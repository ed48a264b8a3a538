//! Data types exchanged with the commerce platform and held in the catalog.

pub mod cart;
pub mod directive;
pub mod inventory;
pub mod product;

pub use cart::*;
pub use directive::*;
pub use inventory::*;
pub use product::*;
