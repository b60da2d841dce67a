use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::errors::DataClientError;
use crate::domain::health::data_client::DataClient;
use crate::domain::health::use_cases::check_readiness::CheckReadinessUseCase;
use crate::domain::logger::Logger;

/// Upper bound for the database probe behind the readiness endpoint.
pub const READINESS_PING_DEADLINE: Duration = Duration::from_secs(2);

pub struct CheckReadinessUseCaseImpl {
    pub data_client: Arc<dyn DataClient>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckReadinessUseCase for CheckReadinessUseCaseImpl {
    async fn execute(&self) -> Result<(), DataClientError> {
        self.data_client
            .ping(READINESS_PING_DEADLINE)
            .await
            .inspect_err(|e| {
                self.logger
                    .error(&format!("Database health check failed: {}", e));
            })
    }
}
