//! User Service Library
//!
//! REST CRUD over the `users` table:
//!
//! - **api**: axum handlers, extractors and routes
//! - **service**: use cases and logging
//! - **repository**: the single data-access interface and its SeaORM store
//! - **infra**: database connection and unit of work
//! - **config**: environment-driven settings

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::UserServiceConfig;
use crate::infra::Database;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: UserServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = Arc::new(Database::connect(&config.database).await?);

    // Build router
    let app = create_router(AppState::from_database(db));

    // Build address
    let addr: SocketAddr = config.server_addr().parse()?;
    info!("User service listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the `users` table if it does not exist (for CLI commands).
pub async fn init_database(config: &UserServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_schema(&config.database).await?;
    db.ensure_schema().await?;
    info!("Users table is ready");

    Ok(())
}
