//! Request handlers.

use super::{internal_server_error, AppState};
use crate::dispatcher::{dispatch, UNKNOWN_ACTION_MESSAGE};
use crate::error::ValidationError;
use crate::model::CartResource;
use crate::validation::ValidationResult;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, warn};

pub const MISSING_PARAMETERS_MESSAGE: &str = "missing body parameters";
pub const UNKNOWN_RESOURCE_MESSAGE: &str = "resource not recognized; allowed: cart, order, payment";

/// Inbound extension call. Both fields are optional here so that their
/// absence can be reported as a validation failure instead of a decode error.
#[derive(Debug, Deserialize)]
pub struct ExtensionRequest {
    #[serde(default)]
    pub action: Option<Value>,
    #[serde(default)]
    pub resource: Option<Value>,
}

/// `POST /` and `POST /cart-validation`.
pub async fn handle_extension(
    State(state): State<AppState>,
    body: Result<Json<ExtensionRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            error!(error = %rejection, "Unreadable extension request");
            return internal_server_error();
        }
    };

    match route(&state, request).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn route(
    state: &AppState,
    request: ExtensionRequest,
) -> Result<ValidationResult, ValidationError> {
    let (action, resource) = match (request.action, request.resource) {
        (Some(action), Some(resource)) if !is_blank(&action) && !resource.is_null() => {
            (action, resource)
        }
        _ => {
            warn!("Extension request without action or resource");
            return Err(ValidationError::invalid_operation(MISSING_PARAMETERS_MESSAGE));
        }
    };

    let type_id = resource
        .get("typeId")
        .and_then(Value::as_str)
        .map(str::to_owned);

    match type_id.as_deref() {
        Some("cart") => {
            let resource: CartResource = serde_json::from_value(resource).map_err(|e| {
                ValidationError::internal(500, format!("unreadable cart resource: {e}"))
            })?;
            match action.as_str() {
                Some(action) => dispatch(action, &resource, state.lookup.as_ref()).await,
                None => {
                    warn!(action = %action, "Non-string cart action");
                    Err(ValidationError::invalid_input(500, UNKNOWN_ACTION_MESSAGE))
                }
            }
        }
        Some("order") | Some("payment") => Ok(ValidationResult::ok(Vec::new())),
        other => {
            warn!(type_id = ?other, "Unrecognized resource type");
            Err(ValidationError::invalid_input(500, UNKNOWN_RESOURCE_MESSAGE))
        }
    }
}

/// Values that count as an absent `action`: `null`, `""`, `false` and `0`.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

/// `GET /health`.
pub async fn health() -> &'static str {
    "ok"
}
