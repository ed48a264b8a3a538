//! # Cart Extension
//!
//! A synchronous extension hook the commerce platform calls while it creates
//! or updates a cart. The extension validates the proposed cart and answers
//! with update directives for the platform to apply, or rejects the
//! mutation with a structured error.
//!
//! - **[model]**: carts, products, inventory entries and update directives.
//! - **[error]**: [`ValidationError`](error::ValidationError), the rejection the platform sees.
//! - **[lookup]**: the [`ResourceLookup`](lookup::ResourceLookup) port and its backends.
//! - **[validation]** and **[dispatcher]**: the decision logic per cart action.
//! - **[service]**: the axum boundary.
//! - **[lifecycle]**, **[product_actor]**, **[inventory_actor]**, **[clients]**:
//!   the in-memory catalog built on `catalog_framework`.

pub mod clients;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod inventory_actor;
pub mod lifecycle;
pub mod lookup;
pub mod model;
pub mod product_actor;
pub mod service;
pub mod validation;
