mod model;
mod server;

use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let dev_users = Arc::new(startup::builtin_dev_users()?);

    // Warn when only the built-in development users can act as admin
    startup::check_for_admin(&db).await?;

    let app = server::router::router()
        .with_state(AppState::new(db, dev_users))
        .layer(CorsLayer::permissive());

    tracing::info!("Starting server on {}", config.server_addr);

    let listener = tokio::net::TcpListener::bind(&config.server_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
