use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::server::error::error_details;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header was supplied.
    ///
    /// Every route requires HTTP Basic credentials. Results in a 401 response
    /// carrying a `WWW-Authenticate` challenge.
    #[error("Request is missing HTTP Basic credentials")]
    MissingCredentials,

    /// The `Authorization` header could not be parsed as Basic credentials.
    ///
    /// Covers an unknown scheme, invalid base64, non-UTF-8 payload, or a
    /// payload without a `:` separator. Results in a 401 response.
    #[error("Malformed HTTP Basic credentials")]
    MalformedCredentials,

    /// The username is unknown or the password did not verify.
    ///
    /// The response body never distinguishes the two cases. Results in a
    /// 401 response.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// An authenticated user lacks a role required by the route.
    ///
    /// Results in a 403 response, distinct from the unauthenticated 401.
    ///
    /// # Fields
    /// - Username of the rejected identity (logged, not returned)
    #[error("User '{0}' does not have the required role")]
    AccessDenied(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Unauthenticated failures (missing, malformed, or wrong credentials) map to
/// 401 with a `WWW-Authenticate: Basic` challenge; authorization failures map
/// to 403. Bodies stay generic so no internal detail leaks to the client.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingCredentials | Self::MalformedCredentials => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Basic realm=\"carhouse\"")],
                Json(error_details(
                    StatusCode::UNAUTHORIZED,
                    "Unauthorized",
                    "Authentication is required to access this resource",
                    "AuthError",
                )),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Basic realm=\"carhouse\"")],
                Json(error_details(
                    StatusCode::UNAUTHORIZED,
                    "Unauthorized",
                    "Invalid username or password",
                    "AuthError",
                )),
            )
                .into_response(),
            Self::AccessDenied(username) => {
                tracing::debug!("Access denied for user '{}'", username);
                (
                    StatusCode::FORBIDDEN,
                    Json(error_details(
                        StatusCode::FORBIDDEN,
                        "Forbidden",
                        "You do not have permission to perform this operation",
                        "AuthError",
                    )),
                )
                    .into_response()
            }
        }
    }
}
