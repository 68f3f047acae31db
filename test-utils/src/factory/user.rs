//! User factory for creating test application users.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. Passwords are stored as bcrypt digests
//! the same way the application stores them, so authentication tests exercise the
//! real verification path.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Bcrypt cost used for test users.
///
/// The minimum cost keeps test suites fast; verification behaves identically
/// at any cost factor.
const TEST_BCRYPT_COST: u32 = 4;

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios. The `password`
/// setter takes the plaintext; the stored value is always a bcrypt digest.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("boss")
///     .password("secret")
///     .authorities("ROLE_ADMIN,ROLE_USER")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    username: String,
    password: String,
    authorities: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"User {id}"` where id is auto-incremented
    /// - username: `"user{id}"`
    /// - password: `"password"` (stored hashed)
    /// - authorities: `"ROLE_USER"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("User {}", id),
            username: format!("user{}", id),
            password: "password".to_string(),
            authorities: "ROLE_USER".to_string(),
        }
    }

    /// Sets the display name for the user.
    ///
    /// # Arguments
    /// - `name` - Display name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the login username for the user.
    ///
    /// # Arguments
    /// - `username` - Unique login key
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the plaintext password for the user.
    ///
    /// The value is bcrypt-hashed at build time; the plaintext never reaches
    /// the database.
    ///
    /// # Arguments
    /// - `password` - Plaintext password to hash
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the comma-separated authorities string for the user.
    ///
    /// # Arguments
    /// - `authorities` - Role labels, e.g. `"ROLE_ADMIN,ROLE_USER"`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn authorities(mut self, authorities: impl Into<String>) -> Self {
        self.authorities = authorities.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity with hashed password
    /// - `Err(DbErr)` - Database error during insert or hash failure
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let digest = bcrypt::hash(&self.password, TEST_BCRYPT_COST)
            .map_err(|e| DbErr::Custom(format!("Failed to hash test password: {}", e)))?;

        entity::user::ActiveModel {
            name: ActiveValue::Set(self.name),
            username: ActiveValue::Set(self.username),
            password: ActiveValue::Set(digest),
            authorities: ActiveValue::Set(self.authorities),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values (ROLE_USER, password "password").
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an admin user (ROLE_ADMIN,ROLE_USER, password "password").
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created admin user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db)
        .authorities("ROLE_ADMIN,ROLE_USER")
        .build()
        .await
}
