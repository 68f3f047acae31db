//! Credential verification for HTTP Basic authentication.
//!
//! Looks up users in the database first and falls back to the in-memory
//! development users. Password comparison only ever happens through bcrypt's
//! verify routine, for both sources.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{AuthenticatedUser, DevUser},
};

/// Service verifying username/password pairs against the user store.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    dev_users: &'a [DevUser],
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, dev_users: &'a [DevUser]) -> Self {
        Self { db, dev_users }
    }

    /// Verifies a credential pair and returns the authenticated identity.
    ///
    /// The database is consulted first; when a user with the username exists
    /// there, that row decides the outcome (a database user shadows a
    /// same-named development user). Only when the database lookup misses are
    /// the in-memory development users checked. Either way the supplied
    /// password goes through `bcrypt::verify` against the stored digest.
    ///
    /// # Arguments
    /// - `username` - Login key from the Basic credentials
    /// - `password` - Plaintext password from the Basic credentials
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - Identity with its parsed role set
    /// - `Err(AppError::AuthErr)` - Unknown username or failed verification
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, AppError> {
        let repo = UserRepository::new(self.db);

        if let Some(user) = repo.find_by_username(username).await? {
            if verify(password, &user.password) {
                return Ok(AuthenticatedUser::from_entity(user));
            }
            return Err(AuthError::InvalidCredentials.into());
        }

        for dev_user in self.dev_users {
            if dev_user.username == username && verify(password, &dev_user.password_hash) {
                return Ok(AuthenticatedUser::from_dev_user(dev_user));
            }
        }

        Err(AuthError::InvalidCredentials.into())
    }
}

/// Checks a plaintext password against a bcrypt digest.
///
/// An unverifiable digest counts as a failed match rather than an internal
/// error, so a corrupt stored hash cannot grant access.
fn verify(password: &str, digest: &str) -> bool {
    matches!(bcrypt::verify(password, digest), Ok(true))
}
