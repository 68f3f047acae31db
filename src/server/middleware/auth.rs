use axum::http::{header, HeaderMap};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{AuthenticatedUser, ADMIN_ROLE},
    service::auth::AuthService,
    state::AppState,
};

/// Permissions a route can require beyond being authenticated.
pub enum Permission {
    Admin,
}

/// Per-request guard combining authentication and role checks.
///
/// Constructed at the top of each handler; `require` parses the Basic
/// credentials, verifies them, and checks the required permissions against
/// the identity's role set. An empty permission slice means the route only
/// requires a valid login.
pub struct AuthGuard<'a> {
    state: &'a AppState,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, headers: &'a HeaderMap) -> Self {
        Self { state, headers }
    }

    /// Authenticates the request and enforces the given permissions.
    ///
    /// # Arguments
    /// - `permissions` - Roles the route requires on top of authentication
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - Verified identity with its role set
    /// - `Err(AppError::AuthErr)` - Missing/invalid credentials (401) or
    ///   missing role (403)
    /// - `Err(AppError::DbErr)` - Database error during the user lookup
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<AuthenticatedUser, AppError> {
        let (username, password) = parse_basic_credentials(self.headers)?;

        let service = AuthService::new(&self.state.db, &self.state.dev_users);
        let user = service.authenticate(&username, &password).await?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.has_role(ADMIN_ROLE) {
                        return Err(AuthError::AccessDenied(user.username.clone()).into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Extracts the username/password pair from an `Authorization: Basic` header.
///
/// # Returns
/// - `Ok((username, password))` - Decoded credential pair
/// - `Err(AuthError::MissingCredentials)` - No `Authorization` header
/// - `Err(AuthError::MalformedCredentials)` - Wrong scheme, bad base64,
///   non-UTF-8 payload, or no `:` separator
fn parse_basic_credentials(headers: &HeaderMap) -> Result<(String, String), AuthError> {
    let header = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingCredentials)?
        .to_str()
        .map_err(|_| AuthError::MalformedCredentials)?;

    let encoded = match header.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("basic") => rest.trim(),
        _ => return Err(AuthError::MalformedCredentials),
    };

    let decoded = BASE64
        .decode(encoded)
        .map_err(|_| AuthError::MalformedCredentials)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthError::MalformedCredentials)?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or(AuthError::MalformedCredentials)?;

    Ok((username.to_string(), password.to_string()))
}
