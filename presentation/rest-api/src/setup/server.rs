use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use poem::endpoint::BoxEndpoint;
use poem::listener::{Acceptor, Listener, TcpListener};
use poem::middleware::{CatchPanic, RequestId, ReuseId};
use poem::{EndpointExt, Route, Server as PoemServer};
use poem_openapi::OpenApiService;
use thiserror::Error;
use tokio::sync::watch;
use tracing::info;

use crate::config::{cors_config, server_config::ServerConfig};
use crate::setup::dependency_injection::DependencyContainer;
use crate::setup::middleware::{RequestLogger, RequestTimeout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Unstarted,
    Serving,
    Draining,
    Stopped,
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("server.listen_error")]
    Listen(#[source] std::io::Error),
    #[error("server.shutdown_timeout: connections still open after {0:?}")]
    ShutdownTimeout(Duration),
}

struct Lifecycle {
    state: watch::Sender<ServerState>,
    shutdown_timeout: Duration,
    local_addr: OnceLock<SocketAddr>,
}

/// HTTP server with the fixed middleware chain and health routes.
///
/// `start` consumes the server and is meant to run on its own task; the
/// `ServerHandle` taken beforehand drives shutdown.
pub struct Server {
    config: ServerConfig,
    app: BoxEndpoint<'static>,
    lifecycle: Arc<Lifecycle>,
}

/// Cloneable control side of a `Server`.
#[derive(Clone)]
pub struct ServerHandle {
    lifecycle: Arc<Lifecycle>,
}

impl Server {
    pub fn new(config: &ServerConfig, container: DependencyContainer) -> Self {
        let addr = config.bind_address();
        let api_service =
            OpenApiService::new(container.health_api, "Avetis Drive API", env!("CARGO_PKG_VERSION"))
                .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        // Last `with` is outermost: request ID runs first.
        let app = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(RequestTimeout::new(config.request_timeout))
            .with(RequestLogger)
            .with(cors_config::init_cors())
            .with(CatchPanic::new())
            .with(RequestId::new().reuse_id(ReuseId::Use))
            .boxed();

        let (state, _) = watch::channel(ServerState::Unstarted);

        Self {
            config: config.clone(),
            app,
            lifecycle: Arc::new(Lifecycle {
                state,
                shutdown_timeout: config.shutdown_timeout,
                local_addr: OnceLock::new(),
            }),
        }
    }

    pub fn handle(&self) -> ServerHandle {
        ServerHandle {
            lifecycle: self.lifecycle.clone(),
        }
    }

    /// Binds and serves until the handle shuts the server down.
    ///
    /// `Ok(())` means the server was closed on purpose; any error is fatal.
    pub async fn start(self) -> Result<(), ServerError> {
        let lifecycle = self.lifecycle;
        if *lifecycle.state.borrow() != ServerState::Unstarted {
            return Ok(());
        }

        let acceptor = match TcpListener::bind(self.config.bind_address())
            .into_acceptor()
            .await
        {
            Ok(acceptor) => acceptor,
            Err(e) => {
                lifecycle.state.send_replace(ServerState::Stopped);
                return Err(ServerError::Listen(e));
            }
        };

        if let Some(addr) = acceptor
            .local_addr()
            .first()
            .and_then(|addr| addr.as_socket_addr().copied())
        {
            let _ = lifecycle.local_addr.set(addr);
        }

        let serving = lifecycle.state.send_if_modified(|state| {
            if *state == ServerState::Unstarted {
                *state = ServerState::Serving;
                true
            } else {
                false
            }
        });
        if !serving {
            // Shut down before the listener was ready.
            return Ok(());
        }

        let mut state = lifecycle.state.subscribe();
        let drain_requested = async move {
            let _ = state
                .wait_for(|state| *state != ServerState::Serving)
                .await;
        };

        // Connections still open `shutdown_timeout` after the drain started
        // are cancelled by poem itself, closing their sockets.
        let result = PoemServer::new_with_acceptor(acceptor)
            .idle_timeout(self.config.request_timeout)
            .run_with_graceful_shutdown(
                self.app,
                drain_requested,
                Some(lifecycle.shutdown_timeout),
            )
            .await
            .map_err(ServerError::Listen);

        lifecycle.state.send_replace(ServerState::Stopped);
        info!("HTTP server stopped");
        result
    }
}

impl ServerHandle {
    #[cfg(test)]
    pub fn state(&self) -> ServerState {
        *self.lifecycle.state.borrow()
    }

    /// Waits until the server has left `Unstarted` and returns the bound
    /// address, or `None` if binding failed or the server never served.
    pub async fn serving(&self) -> Option<SocketAddr> {
        let mut state = self.lifecycle.state.subscribe();
        let _ = state
            .wait_for(|state| *state != ServerState::Unstarted)
            .await;
        drop(state);

        match *self.lifecycle.state.borrow() {
            ServerState::Serving | ServerState::Draining => self.lifecycle.local_addr.get().copied(),
            _ => None,
        }
    }

    /// Stops accepting connections and waits up to the configured shutdown
    /// timeout for in-flight requests. Connections still open past it are
    /// closed and `ShutdownTimeout` is returned once serving has stopped.
    pub async fn shutdown(&self) -> Result<(), ServerError> {
        let deadline = self.lifecycle.shutdown_timeout;
        let mut state = self.lifecycle.state.subscribe();

        self.lifecycle.state.send_if_modified(|state| match *state {
            ServerState::Unstarted => {
                *state = ServerState::Stopped;
                true
            }
            ServerState::Serving => {
                *state = ServerState::Draining;
                true
            }
            ServerState::Draining | ServerState::Stopped => false,
        });

        let drained = tokio::time::timeout(
            deadline,
            state.wait_for(|state| *state == ServerState::Stopped),
        )
        .await
        .is_ok();
        if drained {
            return Ok(());
        }

        let _ = state
            .wait_for(|state| *state == ServerState::Stopped)
            .await;
        Err(ServerError::ShutdownTimeout(deadline))
    }
}
