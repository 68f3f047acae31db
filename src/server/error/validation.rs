use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use thiserror::Error;

use crate::model::api::ValidationErrorDetailsDto;

/// A single request field that failed validation, with its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: &'static str,
}

/// Request validation failure carrying every offending field.
///
/// Collected in full before being raised so a response can enumerate all
/// violations at once rather than stopping at the first one.
#[derive(Error, Debug)]
#[error("Validation failed for one or more request fields")]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// Comma-joined names of the offending fields, in declaration order.
    pub fn fields(&self) -> String {
        self.violations
            .iter()
            .map(|v| v.field)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Comma-joined violation messages, in the same order as `fields()`.
    pub fn messages(&self) -> String {
        self.violations
            .iter()
            .map(|v| v.message)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Converts validation errors into 400 responses enumerating each violation.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorDetailsDto {
                timestamp: Utc::now(),
                status: StatusCode::BAD_REQUEST.as_u16(),
                title: "Bad Request Exception, Invalid Fields".to_string(),
                details: "Check the field(s) error".to_string(),
                developer_message: "ValidationError".to_string(),
                fields: self.fields(),
                fields_message: self.messages(),
            }),
        )
            .into_response()
    }
}
