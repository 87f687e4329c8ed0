/**
 * Server Configuration
 *
 * Configuration is loaded from environment variables (optionally via a .env
 * file), with sensible defaults for local development where a default is
 * safe.
 *
 * # Variables
 *
 * - `SERVER_PORT`       - listen port (default 3000)
 * - `DATABASE_URL`      - SQLite URL (default `sqlite://users.db`)
 * - `SECRET_KEY`        - session signing secret, REQUIRED
 * - `STATIC_DIR`        - static asset directory (default `public`)
 * - `SESSION_TTL_SECS`  - session lifetime (default 86400)
 *
 * `SECRET_KEY` has no default on purpose: a compiled-in fallback secret
 * would make every deployment's session cookies forgeable.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SECRET_KEY is not set; refusing to start without a signing secret")]
    MissingSecretKey,
}

/// Runtime configuration for the service
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen port
    pub port: u16,
    /// SQLite database URL
    pub database_url: String,
    /// Session token signing secret
    pub secret_key: String,
    /// Directory holding index.html and other static assets
    pub static_dir: PathBuf,
    /// Session lifetime in seconds
    pub session_ttl_secs: u64,
}

impl AppConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(3000);

        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::warn!("DATABASE_URL not set, using sqlite://users.db");
            "sqlite://users.db".to_string()
        });

        let secret_key = std::env::var("SECRET_KEY")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingSecretKey)?;

        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));

        let session_ttl_secs = std::env::var("SESSION_TTL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(86_400);

        Ok(Self {
            port,
            database_url,
            secret_key,
            static_dir,
            session_ttl_secs,
        })
    }
}
