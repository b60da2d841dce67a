pub mod config;
pub mod subscriber;
pub mod tracing_logger;

pub use config::{LogFormat, LogLevel, LoggingConfig};
pub use subscriber::{LoggingError, init_tracing};
pub use tracing_logger::TracingLogger;
