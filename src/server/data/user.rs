//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for reading application user
//! records. Users are seeded out of band; this service only ever looks them
//! up at login time.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

use crate::server::model::user::ADMIN_ROLE;

/// Repository providing read access to application users.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by their login username.
    ///
    /// # Arguments
    /// - `username` - The unique login key
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Checks whether any database user carries the admin role.
    ///
    /// Used during startup to warn when only the built-in development users
    /// can perform admin operations.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one user's authorities contain the admin role
    /// - `Ok(false)` - No admin user exists in the database
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Authorities.contains(ADMIN_ROLE))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }
}
