use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{LogFormat, LoggingConfig};

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("logging.file_error: {0}")]
    File(#[from] std::io::Error),
    #[error("logging.init_error: {0}")]
    Init(String),
}

/// Installs the process-wide subscriber: a console sink in the configured
/// format plus an optional append-only JSON file sink.
///
/// `RUST_LOG`, when set, takes precedence over the configured level.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(config.level.as_filter().into()));

    let file_layer = match &config.file {
        Some(path) => Some(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(Mutex::new(open_log_file(path)?)),
        ),
        None => None,
    };

    let json = config.format == LogFormat::Json;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json.then(|| fmt::layer().json()))
        .with((!json).then(|| fmt::layer()))
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}

/// Opens `path` for appending, creating it and its parent directory if needed.
pub fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}
