//! User domain models for authentication and authorization.
//!
//! Provides the authenticated identity carried through a request after the
//! Basic credential check, and the built-in development users that back the
//! in-memory authentication fallback.

/// Role label granting access to admin-only routes.
pub const ADMIN_ROLE: &str = "ROLE_ADMIN";

/// The identity of a successfully authenticated caller.
///
/// `roles` holds the parsed tokens of the stored `authorities` string; for
/// built-in development users it holds their configured roles. `id` is `None`
/// for development users, which exist only in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: Option<i64>,
    pub name: String,
    pub username: String,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// Converts a user entity to an authenticated identity at login time.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name,
            username: entity.username,
            roles: parse_authorities(&entity.authorities),
        }
    }

    /// Converts a built-in development user to an authenticated identity.
    pub fn from_dev_user(user: &DevUser) -> Self {
        Self {
            id: None,
            name: user.name.clone(),
            username: user.username.clone(),
            roles: parse_authorities(&user.authorities),
        }
    }

    /// Whether this identity carries the given role.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// A built-in development user held in memory.
///
/// The password is stored as a bcrypt digest computed at startup; the
/// plaintext never lives beyond the hashing call. These users are additive to
/// the database-backed accounts and only consulted when the database lookup
/// misses.
#[derive(Debug, Clone)]
pub struct DevUser {
    pub name: String,
    pub username: String,
    pub password_hash: String,
    pub authorities: String,
}

/// Parses a comma-separated authorities string into role labels.
///
/// Tokens are trimmed and empty entries dropped, so an empty or
/// whitespace-only string yields no roles.
pub fn parse_authorities(authorities: &str) -> Vec<String> {
    authorities
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
