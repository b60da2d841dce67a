use std::time::Duration;

use super::{ConfigError, get_env_or, parse_env_or};

/// Server configuration for HTTP listener
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound for handling a single request.
    pub request_timeout: Duration,
    /// Overall budget for draining in-flight requests on shutdown.
    pub shutdown_timeout: Duration,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVER_HOST: Host to bind (default: "localhost")
    /// - SERVER_PORT: Port to bind (default: "8080")
    /// - SERVER_REQUEST_TIMEOUT_SECS: Per-request timeout (default: "30")
    /// - SERVER_SHUTDOWN_TIMEOUT_SECS: Graceful shutdown deadline (default: "10")
    pub fn from_lookup<L>(lookup: &L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: get_env_or(lookup, "SERVER_HOST", "localhost"),
            port: parse_env_or(lookup, "SERVER_PORT", 8080)?,
            request_timeout: Duration::from_secs(parse_env_or(
                lookup,
                "SERVER_REQUEST_TIMEOUT_SECS",
                30,
            )?),
            shutdown_timeout: Duration::from_secs(parse_env_or(
                lookup,
                "SERVER_SHUTDOWN_TIMEOUT_SECS",
                10,
            )?),
        })
    }

    /// Get the bind address as "host:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
