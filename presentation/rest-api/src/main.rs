use anyhow::Context;
use tracing::{error, info};

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{
    dependency_injection::DependencyContainer, runtime, server::Server,
    shutdown::shutdown_signal,
};

/// REST API Entry Point
///
/// Startup is strictly sequential: configuration, logging, database
/// connection, migrations, then the HTTP server on a background task.
/// The main task waits for SIGINT/SIGTERM and then drains the server
/// before closing the database client.
///
/// Exits non-zero on any startup failure or when the drain deadline is
/// exceeded.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration (reads .env when present)
    let config = AppConfig::load().context("failed to load configuration")?;

    // 2. Initialize tracing
    logger::init_tracing(&config.logging).context("failed to initialize logging")?;
    info!(
        environment = %config.environment,
        host = %config.server.host,
        port = config.server.port,
        "Starting application"
    );

    // 3. Connect to the database and sync the schema
    let data_client = database_config::init_database(&config.database)
        .await
        .context("failed to connect to database")?;

    if let Err(e) = data_client.migrate().await {
        error!(error = %e, "Database migration failed");
        let _ = data_client.close().await;
        return Err(e).context("failed to run migrations");
    }

    // 4. Wire dependencies, serve until a signal, then drain
    let container = DependencyContainer::new(data_client.clone());
    let server = Server::new(&config.server, container);

    runtime::run(server, data_client, shutdown_signal()).await
}
