/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables and
 * opens the database the account store runs on.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables, with sensible
 * defaults for local development:
 *
 * - `DATABASE_URL` - SQLite URL, default `sqlite://xfgram.db?mode=rwc`
 * - `SERVER_PORT` - Listen port, default 3000
 * - `ASSET_STORE_URL` - Upload endpoint for profile pictures; when unset,
 *   picture uploads are rejected but everything else works
 * - `CORS_ORIGIN` - Allowed browser origin, default `http://localhost:5173`
 *
 * # Error Handling
 *
 * Missing optional settings are logged and defaulted. The database is not
 * optional: if it cannot be opened or migrated, startup fails.
 */

use sqlx::SqlitePool;

/// Default SQLite database, created on first start
const DEFAULT_DATABASE_URL: &str = "sqlite://xfgram.db?mode=rwc";

/// Default listen port
const DEFAULT_PORT: u16 = 3000;

/// Default browser origin for CORS
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Runtime configuration for the server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// SQLite database URL
    pub database_url: String,
    /// Port the server listens on
    pub port: u16,
    /// Upload endpoint for the asset store, if configured
    pub asset_store_url: Option<String>,
    /// Browser origin allowed by CORS
    pub cors_origin: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Never fails; anything missing falls back to a development default
    /// and logs a warning so misconfigured deployments are visible.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::warn!("DATABASE_URL not set, using {}", DEFAULT_DATABASE_URL);
            DEFAULT_DATABASE_URL.to_string()
        });

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|raw| match raw.parse::<u16>() {
                Ok(port) => Some(port),
                Err(_) => {
                    tracing::warn!("SERVER_PORT {:?} is not a port number, using {}", raw, DEFAULT_PORT);
                    None
                }
            })
            .unwrap_or(DEFAULT_PORT);

        let asset_store_url = std::env::var("ASSET_STORE_URL").ok();
        if asset_store_url.is_none() {
            tracing::warn!("ASSET_STORE_URL not set, picture uploads will be rejected");
        }

        let cors_origin =
            std::env::var("CORS_ORIGIN").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());

        Self {
            database_url,
            port,
            asset_store_url,
            cors_origin,
        }
    }
}

/// Open the database and bring the schema up to date
///
/// This function:
/// 1. Connects a pool to `database_url`
/// 2. Runs the bundled migrations
///
/// # Errors
///
/// Fails if the database cannot be opened or a migration does not apply.
/// The server cannot run without its store, so the caller should treat
/// this as fatal.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = SqlitePool::connect(database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}
