use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Structured error body returned for domain, auth, and internal errors.
///
/// Every error response from the API carries this shape so clients can rely
/// on a single error contract regardless of which endpoint failed.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDetailsDto {
    /// Moment the error response was produced.
    pub timestamp: DateTime<Utc>,
    /// HTTP status code repeated in the body.
    pub status: u16,
    /// Short human-readable classification of the failure.
    pub title: String,
    /// Description of what went wrong with this particular request.
    pub details: String,
    /// Error type identifier for diagnostics; never a stack trace.
    #[serde(rename = "developerMessage")]
    pub developer_message: String,
}

/// Structured error body for request validation failures.
///
/// Extends the standard error shape with the complete list of offending
/// fields and their messages, comma-joined, so a client sees every violation
/// at once rather than just the first.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDetailsDto {
    /// Moment the error response was produced.
    pub timestamp: DateTime<Utc>,
    /// HTTP status code repeated in the body.
    pub status: u16,
    /// Short human-readable classification of the failure.
    pub title: String,
    /// Description of what went wrong with this particular request.
    pub details: String,
    /// Error type identifier for diagnostics; never a stack trace.
    #[serde(rename = "developerMessage")]
    pub developer_message: String,
    /// Comma-joined names of every field that failed validation.
    pub fields: String,
    /// Comma-joined validation messages, in the same order as `fields`.
    #[serde(rename = "fieldsMessage")]
    pub fields_message: String,
}
