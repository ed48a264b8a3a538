//! # Validation Errors
//!
//! The typed error the extension returns to the commerce platform when a cart
//! mutation must be rejected. It carries the HTTP status the platform should
//! see and an ordered, non-empty list of error details; `errors[0]` is the
//! one-line summary.
//!
//! On the wire it serializes as:
//!
//! ```json
//! { "statusCode": 400, "errors": [{ "code": "InvalidOperation", "message": "..." }] }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error taxonomy understood by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Malformed or unrecognized action or resource type.
    InvalidInput,
    /// Business-rule violation (insufficient stock, missing inventory entry).
    InvalidOperation,
    /// Unexpected failure.
    InternalServerError,
}

/// One `{code, message}` entry of a [`ValidationError`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_extra_info: Option<serde_json::Value>,
}

impl ErrorDetail {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            localized_message: None,
            extension_extra_info: None,
        }
    }

    pub fn with_localized_message(mut self, message: impl Into<String>) -> Self {
        self.localized_message = Some(message.into());
        self
    }

    pub fn with_extra_info(mut self, info: serde_json::Value) -> Self {
        self.extension_extra_info = Some(info);
        self
    }
}

/// A rejected cart mutation.
///
/// Built at the point an invariant fails and passed up to the boundary
/// unchanged. `details` is never empty: the only constructors take a first
/// detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    status_code: u16,
    #[serde(rename = "errors")]
    details: Vec<ErrorDetail>,
}

impl ValidationError {
    pub fn new(status_code: u16, code: ErrorCode, message: impl Into<String>) -> Self {
        Self::from_detail(status_code, ErrorDetail::new(code, message))
    }

    pub fn from_detail(status_code: u16, detail: ErrorDetail) -> Self {
        Self {
            status_code,
            details: vec![detail],
        }
    }

    /// `InvalidInput` with the given status.
    pub fn invalid_input(status_code: u16, message: impl Into<String>) -> Self {
        Self::new(status_code, ErrorCode::InvalidInput, message)
    }

    /// `InvalidOperation`, status 400.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::new(400, ErrorCode::InvalidOperation, message)
    }

    /// `InternalServerError` with the given status.
    pub fn internal(status_code: u16, message: impl Into<String>) -> Self {
        Self::new(status_code, ErrorCode::InternalServerError, message)
    }

    /// Appends another detail after the existing ones.
    pub fn with_detail(mut self, detail: ErrorDetail) -> Self {
        self.details.push(detail);
        self
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn details(&self) -> &[ErrorDetail] {
        &self.details
    }

    /// The first detail's code.
    pub fn code(&self) -> ErrorCode {
        self.details[0].code
    }

    /// The first detail's message.
    pub fn summary(&self) -> &str {
        &self.details[0].message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.summary())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_is_first_detail() {
        let err = ValidationError::invalid_operation("stock level for ABC is less than 5")
            .with_detail(ErrorDetail::new(ErrorCode::InternalServerError, "second"));

        assert_eq!(err.status_code(), 400);
        assert_eq!(err.code(), ErrorCode::InvalidOperation);
        assert_eq!(err.summary(), "stock level for ABC is less than 5");
        assert_eq!(err.to_string(), "stock level for ABC is less than 5");
        assert_eq!(err.details().len(), 2);
    }

    #[test]
    fn serializes_status_and_errors() {
        let err = ValidationError::invalid_input(500, "resource not recognized");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(
            value,
            json!({
                "statusCode": 500,
                "errors": [{ "code": "InvalidInput", "message": "resource not recognized" }]
            })
        );
    }

    #[test]
    fn optional_detail_fields_use_platform_names() {
        let detail = ErrorDetail::new(ErrorCode::InvalidOperation, "out of stock")
            .with_localized_message("Nicht auf Lager")
            .with_extra_info(json!({ "sku": "ABC" }));
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["localizedMessage"], "Nicht auf Lager");
        assert_eq!(value["extensionExtraInfo"]["sku"], "ABC");
    }
}
