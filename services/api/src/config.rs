//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    /// Location of the SQLite file holding user records.
    pub auth_db_path: PathBuf,
    /// Seed identity upserted at the start of every login request.
    pub admin_username: String,
    /// Shipped default is a placeholder and must be overridden in any real
    /// deployment.
    pub admin_password: String,
    pub gemini_api_key: Option<String>,
    pub analysis_model: String,
    pub cors_origin: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        // --- Load Server Settings ---
        let bind_address_str =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        // --- Load Auth Store Settings ---
        let auth_db_path = std::env::var("AUTH_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp/auth.db"));
        let admin_username =
            std::env::var("AUTH_ADMIN_USER").unwrap_or_else(|_| "admin".to_string());
        let admin_password =
            std::env::var("AUTH_ADMIN_PASS").unwrap_or_else(|_| "xtract1234".to_string());

        // --- Load Model Settings (key is optional, checked per request) ---
        let gemini_api_key = std::env::var("GEMINI_API_KEY").ok();
        let analysis_model =
            std::env::var("ANALYSIS_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string());

        let cors_origin =
            std::env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

        Ok(Self {
            bind_address,
            log_level,
            auth_db_path,
            admin_username,
            admin_password,
            gemini_api_key,
            analysis_model,
            cors_origin,
        })
    }
}
