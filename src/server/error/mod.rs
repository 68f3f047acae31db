//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` so every endpoint renders the same structured JSON error body.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use thiserror::Error;

use crate::{
    model::api::ErrorDetailsDto,
    server::error::{auth::AuthError, config::ConfigError, validation::ValidationError},
};

/// Title used for domain errors where the request itself was well-formed but
/// cannot be satisfied (e.g. an id that matches no row).
const BAD_REQUEST_TITLE: &str = "Bad Request Exception, Check the Documentation";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Auth and validation errors handle their own response mapping,
/// while the remaining variants map here.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping
    /// (401 Unauthorized with a Basic challenge, or 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Request payload validation failure.
    ///
    /// Delegates to `ValidationError::into_response()`, which reports every
    /// offending field in a 400 response.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error; the error message and type name
    /// are included for diagnostics, never a backtrace.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the HTTP listener.
    ///
    /// Only occurs during startup and shutdown; surfaces as a process error
    /// rather than an HTTP response under normal operation.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Requested entity does not exist for the given key.
    ///
    /// Results in 400 Bad Request with a descriptive message in `details`,
    /// so clients get an explanation instead of a bare status.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request input outside of body validation (e.g. a malformed
    /// `sort` query parameter).
    ///
    /// Results in 400 Bad Request with the provided error message.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error.
    ///
    /// # Fields
    /// - Detailed error message for the response `details` and server log
    #[error("{0}")]
    InternalError(String),
}

/// Builds the standard structured error body.
///
/// Shared by every error path so the wire shape cannot drift between
/// variants.
pub(crate) fn error_details(
    status: StatusCode,
    title: &str,
    details: &str,
    developer_message: &str,
) -> ErrorDetailsDto {
    ErrorDetailsDto {
        timestamp: Utc::now(),
        status: status.as_u16(),
        title: title.to_string(),
        details: details.to_string(),
        developer_message: developer_message.to_string(),
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and structured
/// response body. Auth and validation errors delegate to their own response
/// handling; everything else renders here. Internal failures are logged with
/// full details before the response is produced.
///
/// # Returns
/// - 400 Bad Request - For `NotFound` and `BadRequest` variants
/// - 401 / 403 - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 400 with field detail - For `ValidationErr`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ValidationErr(err) => err.into_response(),
            Self::NotFound(msg) => (
                StatusCode::BAD_REQUEST,
                Json(error_details(
                    StatusCode::BAD_REQUEST,
                    BAD_REQUEST_TITLE,
                    &msg,
                    "AppError::NotFound",
                )),
            )
                .into_response(),
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(error_details(
                    StatusCode::BAD_REQUEST,
                    BAD_REQUEST_TITLE,
                    &msg,
                    "AppError::BadRequest",
                )),
            )
                .into_response(),
            Self::DbErr(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(error_details(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal Server Error",
                        &err.to_string(),
                        "sea_orm::DbErr",
                    )),
                )
                    .into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(error_details(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal Server Error",
                        &msg,
                        "AppError::InternalError",
                    )),
                )
                    .into_response()
            }
            err => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(error_details(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal Server Error",
                        "Internal server error",
                        "AppError",
                    )),
                )
                    .into_response()
            }
        }
    }
}
