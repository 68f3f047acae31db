use migration::{Migrator, MigratorTrait};
use sea_orm_migration::sea_orm::Database;

/// Applies all pending migrations against `DATABASE_URL`.
///
/// The server runs migrations automatically at startup; this binary exists
/// for applying them ahead of a deploy.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let url = std::env::var("DATABASE_URL")?;

    let db = Database::connect(&url).await?;
    Migrator::up(&db, None).await?;

    println!("Migrations applied");

    Ok(())
}
