use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` adapter that tags every event with the owning component.
///
/// Level filtering is left to the installed subscriber, so `RUST_LOG` and
/// `LOG_LEVEL` govern port-routed events exactly like direct `tracing` calls.
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(component = self.component, "{}", message);
    }
}
