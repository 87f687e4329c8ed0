/**
 * Server Initialization
 *
 * This module handles the setup of the Axum application: database
 * connection, schema bootstrap, state creation, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Connect the SQLite pool, creating the database file if missing
 * 2. Create the users table if absent
 * 3. Build the account store and session signer handles
 * 4. Create the router
 *
 * Unlike optional services that degrade gracefully, the database is the
 * whole point of this service; failure to open it aborts startup.
 */

use std::str::FromStr;
use std::sync::Arc;

use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

use crate::auth::sessions::SessionSigner;
use crate::auth::store::{AccountStore, StoreError};
use crate::routes::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Errors during application startup
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to open database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("failed to initialize schema: {0}")]
    Schema(#[from] StoreError),
}

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app(config: &AppConfig) -> Result<Router, InitError> {
    tracing::info!("Initializing accountd server");

    let pool = connect_database(&config.database_url).await?;

    let store = AccountStore::new(pool);
    store.init_schema().await?;
    tracing::info!("Database ready at {}", config.database_url);

    let sessions = Arc::new(SessionSigner::new(
        &config.secret_key,
        config.session_ttl_secs,
    ));

    let state = AppState {
        store,
        sessions,
        static_dir: config.static_dir.clone(),
    };

    Ok(create_router(state))
}

/// Open the SQLite connection pool
///
/// The database file is created if it does not exist yet.
async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}
