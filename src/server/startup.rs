use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    model::user::DevUser,
};

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool to the database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the
/// database schema is up-to-date. This function must complete successfully before the
/// application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the in-memory development users with bcrypt-hashed passwords.
///
/// These accounts exist purely for local development and are consulted only
/// when a username is absent from the database. Hashing happens here, once,
/// so the plaintext never outlives startup and login always goes through the
/// same verify path as database users.
///
/// # Returns
/// - `Ok(Vec<DevUser>)` - `admin`/`admin` (ROLE_ADMIN,ROLE_USER) and
///   `user`/`user` (ROLE_USER)
/// - `Err(AppError::InternalError)` - Hashing failed
pub fn builtin_dev_users() -> Result<Vec<DevUser>, AppError> {
    let users = [
        ("Development Admin", "admin", "admin", "ROLE_ADMIN,ROLE_USER"),
        ("Development User", "user", "user", "ROLE_USER"),
    ];

    users
        .into_iter()
        .map(|(name, username, password, authorities)| {
            let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
                .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

            Ok(DevUser {
                name: name.to_string(),
                username: username.to_string(),
                password_hash,
                authorities: authorities.to_string(),
            })
        })
        .collect()
}

/// Logs a warning when the database holds no admin user.
///
/// Users are seeded out of band; until an admin row exists, only the built-in
/// development users can perform admin operations, which is worth surfacing
/// at startup.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(())` - Check completed (warning logged if applicable)
/// - `Err(AppError)` - Database error during the check
pub async fn check_for_admin(db: &DatabaseConnection) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if !user_repo.admin_exists().await? {
        tracing::warn!(
            "No admin user found in the database; only the built-in development users can perform admin operations"
        );
    }

    Ok(())
}
