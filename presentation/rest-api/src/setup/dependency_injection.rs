use std::sync::Arc;

use business::application::health::check_readiness::CheckReadinessUseCaseImpl;
use business::domain::health::data_client::DataClient;
use logger::TracingLogger;

use crate::api::health::routes::HealthApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
}

impl DependencyContainer {
    /// The container only borrows the data client; closing it stays with
    /// the entry point.
    pub fn new(data_client: Arc<dyn DataClient>) -> Self {
        let check_readiness_use_case = Arc::new(CheckReadinessUseCaseImpl {
            data_client,
            logger: Arc::new(TracingLogger::new("readiness")),
        });

        Self {
            health_api: HealthApi::new(check_readiness_use_case),
        }
    }
}
