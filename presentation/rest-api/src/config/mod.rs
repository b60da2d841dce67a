pub mod app_config;
pub mod cors_config;
pub mod database_config;
pub mod logging_config;
pub mod server_config;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config.validation_error: {0}")]
    Validation(String),
}

/// Reads `key` through `lookup`, treating unset and empty values alike.
pub(crate) fn get_env<L>(lookup: &L, key: &str) -> Option<String>
where
    L: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.is_empty())
}

pub(crate) fn get_env_or<L>(lookup: &L, key: &str, default: &str) -> String
where
    L: Fn(&str) -> Option<String>,
{
    get_env(lookup, key).unwrap_or_else(|| default.to_string())
}

pub(crate) fn parse_env_or<L, T>(lookup: &L, key: &str, default: T) -> Result<T, ConfigError>
where
    L: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match get_env(lookup, key) {
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::Validation(format!("{key} has an invalid value: {raw}"))),
        None => Ok(default),
    }
}
