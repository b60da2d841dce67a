use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::migrate::Migrator;

use business::domain::errors::DataClientError;
use business::domain::health::data_client::DataClient;
use business::domain::logger::Logger;

use crate::db::{self, DatabaseConfig, DatabaseError, PoolPolicy};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// PostgreSQL-backed `DataClient`. Owns its pool exclusively.
pub struct PostgresDataClient {
    pool: PgPool,
    closed: AtomicBool,
    logger: Arc<dyn Logger>,
}

impl PostgresDataClient {
    pub fn new(pool: PgPool, logger: Arc<dyn Logger>) -> Self {
        Self {
            pool,
            closed: AtomicBool::new(false),
            logger,
        }
    }

    /// Connects with the fixed pool policy and wraps the resulting pool.
    pub async fn connect(
        config: &DatabaseConfig,
        logger: Arc<dyn Logger>,
    ) -> Result<Self, DatabaseError> {
        let pool = db::connect(config, &PoolPolicy::default(), logger.as_ref()).await?;
        Ok(Self::new(pool, logger))
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire) || self.pool.is_closed()
    }
}

#[async_trait]
impl DataClient for PostgresDataClient {
    async fn migrate(&self) -> Result<(), DataClientError> {
        if self.is_closed() {
            return Err(DataClientError::Closed);
        }

        self.logger.info("Running database migrations...");
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(DataClientError::migration)?;
        self.logger
            .info("Database migrations completed successfully");
        Ok(())
    }

    async fn ping(&self, deadline: Duration) -> Result<(), DataClientError> {
        if self.is_closed() {
            return Err(DataClientError::Closed);
        }

        match tokio::time::timeout(deadline, sqlx::query("SELECT 1").execute(&self.pool)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(sqlx::Error::PoolTimedOut)) | Err(_) => {
                Err(DataClientError::PingTimeout(deadline))
            }
            Ok(Err(e)) => Err(DataClientError::unreachable(e)),
        }
    }

    async fn close(&self) -> Result<(), DataClientError> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }

        self.logger.info("Closing database client");
        self.pool.close().await;
        Ok(())
    }
}
