//! # Catalog Lifecycle
//!
//! Starts, seeds and stops the in-memory catalog that backs
//! [`CatalogLookup`](crate::lookup::CatalogLookup).
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for every actor task to finish
//!
//! Lookups hold client clones, so they must be dropped (for example by
//! stopping the HTTP server) before [`CatalogSystem::shutdown`] can complete.
//!
//! Logging is initialised separately through
//! [`catalog_framework::tracing::setup_tracing`].

pub mod catalog_system;

pub use catalog_system::*;
