//! # HTTP Boundary
//!
//! The platform calls the extension with `POST {action, resource}` and
//! expects either `200 {statusCode, actions}` or `<status> {statusCode, errors}`.
//! This module owns that translation; the validation core never sees HTTP.

pub mod routes;

use crate::error::{ErrorCode, ErrorDetail, ValidationError};
use crate::lookup::ResourceLookup;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<dyn ResourceLookup>,
}

impl AppState {
    pub fn new(lookup: Arc<dyn ResourceLookup>) -> Self {
        Self { lookup }
    }
}

/// Builds the extension's router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", post(routes::handle_extension))
        .route("/cart-validation", post(routes::handle_extension))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Body for failures that never became a [`ValidationError`], such as a
/// request body that is not JSON.
#[derive(Debug, Serialize)]
struct GenericErrorBody {
    errors: Vec<ErrorDetail>,
}

pub(crate) fn internal_server_error() -> Response {
    let body = GenericErrorBody {
        errors: vec![ErrorDetail::new(
            ErrorCode::InternalServerError,
            "Internal server error",
        )],
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
