use async_trait::async_trait;

use crate::domain::errors::DataClientError;

#[async_trait]
pub trait CheckReadinessUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), DataClientError>;
}
