//! A catalog product, as far as cart validation cares about it.
//!
//! # Actor Framework
//! [`Product`] implements the [`ActorEntity`](catalog_framework::ActorEntity) trait,
//! keyed by its platform ID, allowing it to be served by a
//! [`ResourceActor`](catalog_framework::ResourceActor).
//!
//! See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
//! - Creation parameters ([`ProductCreate`])
//! - Update parameters ([`ProductUpdate`])

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Product {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            key: None,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Payload for registering a product in the catalog. The ID is assigned by
/// the platform and mirrored as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub id: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub key: Option<String>,
    pub name: Option<String>,
}
