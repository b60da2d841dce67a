use std::time::Duration;

/// Data client errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum DataClientError {
    #[error("database.unreachable: {0}")]
    Unreachable(String),
    #[error("database.ping_timeout: no response within {0:?}")]
    PingTimeout(Duration),
    #[error("database.migration_error: {0}")]
    Migration(String),
    #[error("database.closed")]
    Closed,
}

impl DataClientError {
    pub fn unreachable(reason: impl ToString) -> Self {
        DataClientError::Unreachable(reason.to_string())
    }
    pub fn migration(reason: impl ToString) -> Self {
        DataClientError::Migration(reason.to_string())
    }
}
