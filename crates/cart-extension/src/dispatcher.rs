//! # Dispatcher
//!
//! Routes a cart action name to its validator. Unknown actions are rejected
//! before any lookup is made.

use crate::error::ValidationError;
use crate::lookup::ResourceLookup;
use crate::model::CartResource;
use crate::validation::{ActionValidator, CreateValidator, UpdateValidator, ValidationResult};
use std::fmt;
use std::str::FromStr;
use tracing::{info, instrument, warn};

pub const UNKNOWN_ACTION_MESSAGE: &str = "resource not recognized; allowed: Create, Update";

/// Cart actions the platform sends. Names are matched exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    Create,
    Update,
}

impl CartAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CartAction::Create => "Create",
            CartAction::Update => "Update",
        }
    }

    pub fn validator(&self) -> &'static dyn ActionValidator {
        match self {
            CartAction::Create => &CreateValidator,
            CartAction::Update => &UpdateValidator,
        }
    }
}

impl fmt::Display for CartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CartAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Create" => Ok(CartAction::Create),
            "Update" => Ok(CartAction::Update),
            _ => Err(ValidationError::invalid_input(500, UNKNOWN_ACTION_MESSAGE)),
        }
    }
}

/// Validates `resource` for `action` against `lookup`.
#[instrument(skip(resource, lookup))]
pub async fn dispatch(
    action: &str,
    resource: &CartResource,
    lookup: &dyn ResourceLookup,
) -> Result<ValidationResult, ValidationError> {
    let action = action.parse::<CartAction>().inspect_err(|_| {
        warn!("Unrecognized cart action");
    })?;

    let result = action.validator().validate(resource, lookup).await;
    match &result {
        Ok(ok) => info!(directives = ok.actions.len(), "Cart accepted"),
        Err(e) => info!(status = e.status_code(), reason = %e, "Cart rejected"),
    }
    result
}
