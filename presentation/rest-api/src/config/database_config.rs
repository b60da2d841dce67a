use std::sync::Arc;

use business::domain::health::data_client::DataClient;
use logger::TracingLogger;
use persistence::client::PostgresDataClient;
use persistence::db::{DatabaseConfig, DatabaseError};

use super::{ConfigError, get_env, get_env_or, parse_env_or};

/// Load database configuration from environment variables
///
/// Environment variables:
/// - DB_HOST (default: "localhost"), DB_PORT (default: "5432")
/// - DB_NAME (default: "avetis_drive"), DB_USER (default: "postgres")
/// - DB_PASSWORD: required unless DATABASE_URL is set
/// - DATABASE_URL: full connection string, overrides the discrete fields
///
/// # Errors
/// Returns a validation error if neither DB_PASSWORD nor DATABASE_URL is set
pub fn from_lookup<L>(lookup: &L) -> Result<DatabaseConfig, ConfigError>
where
    L: Fn(&str) -> Option<String>,
{
    let config = DatabaseConfig {
        host: get_env_or(lookup, "DB_HOST", "localhost"),
        port: parse_env_or(lookup, "DB_PORT", 5432)?,
        name: get_env_or(lookup, "DB_NAME", "avetis_drive"),
        user: get_env_or(lookup, "DB_USER", "postgres"),
        password: get_env_or(lookup, "DB_PASSWORD", ""),
        database_url: get_env(lookup, "DATABASE_URL"),
    };

    if config.password.is_empty() && config.database_url.is_none() {
        return Err(ConfigError::Validation(
            "either DB_PASSWORD or DATABASE_URL must be set".to_string(),
        ));
    }

    Ok(config)
}

/// Initialize the application data client
///
/// Connects, provisions the database if needed and probes reachability.
///
/// # Errors
/// Returns error if the DSN is invalid or the database cannot be reached
pub async fn init_database(config: &DatabaseConfig) -> Result<Arc<dyn DataClient>, DatabaseError> {
    let logger = Arc::new(TracingLogger::new("database"));
    let client = PostgresDataClient::connect(config, logger).await?;
    Ok(Arc::new(client))
}
