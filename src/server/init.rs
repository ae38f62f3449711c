/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database setup, state creation, and route configuration.
 *
 * # Initialization Process
 *
 * The server initialization follows these steps:
 * 1. Connect to the database and run pending migrations
 * 2. Build the account and message stores on top of the pool
 * 3. Load optional services (remote asset store)
 * 4. Create and configure the router
 *
 * # Error Handling
 *
 * Unlike the optional services, the database is required: accounts and
 * follow edges have no in-memory fallback, so a connection or migration
 * failure aborts startup.
 */

use std::sync::Arc;

use axum::Router;

use crate::messaging::MessageStore;
use crate::routes::router::create_router;
use crate::server::config::{connect_database, ServerConfig};
use crate::server::state::AppState;
use crate::uploads::{HttpAssetStore, SharedAssetStore};
use crate::users::UserStore;

/// Create and configure the Axum application
///
/// This function sets up the Axum HTTP server with:
/// - Database connection pool and migrations
/// - Account and message stores
/// - Remote asset store (if configured)
/// - Route configuration
///
/// # Arguments
///
/// * `config` - Server configuration loaded from the environment
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Returns the underlying `sqlx::Error` when the database cannot be
/// reached or a migration fails. Callers should treat this as fatal.
pub async fn create_app(config: &ServerConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing xfgram backend server");

    // Step 1: Connect to the database and run migrations
    let pool = connect_database(&config.database_url).await?;

    // Step 2: Build the stores on top of the shared pool
    let store = UserStore::new(pool.clone());
    let messages = MessageStore::new(pool);

    // Step 3: Load optional services
    // Absence is reported when the config is loaded, so only log presence
    let assets: Option<SharedAssetStore> = config.asset_store_url.as_ref().map(|url| {
        tracing::info!("Asset store configured at {}", url);
        Arc::new(HttpAssetStore::new(url.clone())) as SharedAssetStore
    });

    // Step 4: Create app state
    let app_state = AppState {
        store,
        messages,
        assets,
    };

    // Step 5: Create router with all routes
    let app = create_router(app_state, &config.cors_origin);

    tracing::info!("Router configured");

    Ok(app)
}
