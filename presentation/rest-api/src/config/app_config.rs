use std::env;

use dotenvy::dotenv;
use logger::LoggingConfig;
use persistence::db::DatabaseConfig;

use super::{ConfigError, database_config, get_env_or, logging_config, server_config::ServerConfig};

/// Process-wide configuration, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: String,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first if present; its
    /// absence is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(&|key: &str| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable source.
    ///
    /// Environment variables:
    /// - APP_ENV: Environment name (default: "development")
    /// - see `ServerConfig`, `database_config` and `logging_config` for the rest
    pub fn from_lookup<L>(lookup: &L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            environment: get_env_or(lookup, "APP_ENV", "development"),
            server: ServerConfig::from_lookup(lookup)?,
            database: database_config::from_lookup(lookup)?,
            logging: logging_config::from_lookup(lookup),
        })
    }
}
