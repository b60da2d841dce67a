use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use business::domain::errors::DataClientError;
use business::domain::health::data_client::DataClient;

use crate::setup::server::{ServerHandle, ServerState};

/// Data client whose ping answers after `delay`, honouring the deadline.
///
/// Counts `close` calls and, once attached to a server, remembers the server
/// state observed at the first close.
pub struct FakeDataClient {
    delay: Duration,
    closes: AtomicUsize,
    server: OnceLock<ServerHandle>,
    state_at_close: Mutex<Option<ServerState>>,
}

impl FakeDataClient {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            closes: AtomicUsize::new(0),
            server: OnceLock::new(),
            state_at_close: Mutex::new(None),
        }
    }

    pub fn attach(&self, handle: ServerHandle) {
        let _ = self.server.set(handle);
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    pub fn state_at_close(&self) -> Option<ServerState> {
        *self.state_at_close.lock().unwrap()
    }
}

#[async_trait]
impl DataClient for FakeDataClient {
    async fn migrate(&self) -> Result<(), DataClientError> {
        Ok(())
    }

    async fn ping(&self, deadline: Duration) -> Result<(), DataClientError> {
        tokio::time::timeout(deadline, tokio::time::sleep(self.delay))
            .await
            .map_err(|_| DataClientError::PingTimeout(deadline))
    }

    async fn close(&self) -> Result<(), DataClientError> {
        if self.closes.fetch_add(1, Ordering::SeqCst) == 0 {
            let state = self.server.get().map(ServerHandle::state);
            *self.state_at_close.lock().unwrap() = state;
        }
        Ok(())
    }
}
