use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use business::domain::health::data_client::DataClient;
use tracing::{error, info, warn};

use crate::setup::server::Server;

/// Serves until `signal` resolves, then drains HTTP before closing the
/// data client.
///
/// Returns an error when the server fails on its own or when draining
/// overruns the shutdown timeout. The data client is closed exactly once on
/// every path.
pub async fn run<S>(
    server: Server,
    data_client: Arc<dyn DataClient>,
    signal: S,
) -> anyhow::Result<()>
where
    S: Future<Output = &'static str>,
{
    let handle = server.handle();
    let mut serving = tokio::spawn(server.start());

    if let Some(addr) = handle.serving().await {
        info!(address = %addr, "HTTP server listening");
    }

    tokio::select! {
        signal = signal => {
            info!(signal, "Shutdown signal received, draining connections");
        }
        result = &mut serving => {
            close_data_client(data_client.as_ref()).await;
            return match result {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(e).context("HTTP server failed"),
                Err(e) => Err(e).context("HTTP server task panicked"),
            };
        }
    }

    let shutdown = handle.shutdown().await;
    close_data_client(data_client.as_ref()).await;

    match shutdown {
        Ok(()) => {
            info!("Server exited gracefully");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Server forced to shutdown");
            Err(e.into())
        }
    }
}

async fn close_data_client(data_client: &dyn DataClient) {
    if let Err(e) = data_client.close().await {
        warn!(error = %e, "Failed to close database client");
    }
}
