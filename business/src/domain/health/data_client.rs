use std::time::Duration;

use async_trait::async_trait;

use crate::domain::errors::DataClientError;

/// Narrow view over the application database.
///
/// Adapters own their connection pool; consumers only get schema migration,
/// a bounded connectivity probe and a one-shot close.
#[async_trait]
pub trait DataClient: Send + Sync {
    /// Applies pending schema migrations. Safe to run on every startup.
    async fn migrate(&self) -> Result<(), DataClientError>;
    /// Runs a minimal read query, giving up once `deadline` has elapsed.
    async fn ping(&self, deadline: Duration) -> Result<(), DataClientError>;
    /// Releases the underlying connections. Calls after the first are no-ops.
    async fn close(&self) -> Result<(), DataClientError>;
}
