use std::path::PathBuf;

use logger::{LogFormat, LogLevel, LoggingConfig};

use super::{get_env, get_env_or};

/// Value of `LOG_FILE` that turns the file sink off.
const LOG_FILE_DISABLED: &str = "none";

/// Load logging configuration from environment variables
///
/// Environment variables:
/// - LOG_LEVEL: debug, info, warn, error (default: "info")
/// - LOG_FORMAT: json or text (default: "json")
/// - LOG_FILE: append-only JSON log file, "none" to disable (default: "logs/app.log")
pub fn from_lookup<L>(lookup: &L) -> LoggingConfig
where
    L: Fn(&str) -> Option<String>,
{
    let file = match get_env(lookup, "LOG_FILE") {
        Some(path) if path.eq_ignore_ascii_case(LOG_FILE_DISABLED) => None,
        Some(path) => Some(PathBuf::from(path)),
        None => LoggingConfig::default().file,
    };

    LoggingConfig {
        level: LogLevel::parse(&get_env_or(lookup, "LOG_LEVEL", "info")),
        format: LogFormat::parse(&get_env_or(lookup, "LOG_FORMAT", "json")),
        file,
    }
}
