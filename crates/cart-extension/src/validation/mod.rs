//! # Action Validators
//!
//! One validator per cart action. A validator reads the proposed cart,
//! performs at most one lookup, and either accepts the mutation (optionally
//! with update directives for the platform to apply) or rejects it with a
//! [`ValidationError`].
//!
//! Validators are all-or-nothing: no directives are returned alongside an
//! error.

pub mod create;
pub mod update;

pub use create::CreateValidator;
pub use update::UpdateValidator;

use crate::error::ValidationError;
use crate::lookup::ResourceLookup;
use crate::model::{CartResource, UpdateDirective};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Accepted mutation: `{statusCode: 200, actions: [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub status_code: u16,
    pub actions: Vec<UpdateDirective>,
}

impl ValidationResult {
    pub fn ok(actions: Vec<UpdateDirective>) -> Self {
        Self {
            status_code: 200,
            actions,
        }
    }
}

#[async_trait]
pub trait ActionValidator: Send + Sync {
    async fn validate(
        &self,
        resource: &CartResource,
        lookup: &dyn ResourceLookup,
    ) -> Result<ValidationResult, ValidationError>;
}
