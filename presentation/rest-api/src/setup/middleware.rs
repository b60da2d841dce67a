use std::time::{Duration, Instant};

use poem::http::StatusCode;
use poem::middleware::ReqId;
use poem::{Endpoint, Error, IntoResponse, Middleware, Request, Response, Result};
use tracing::{error, info};

/// Logs one structured event per request, tagged with the request ID.
///
/// Must sit inside `RequestId` so the ID is already attached.
pub struct RequestLogger;

impl<E: Endpoint> Middleware<E> for RequestLogger {
    type Output = RequestLoggerEndpoint<E>;

    fn transform(&self, inner: E) -> Self::Output {
        RequestLoggerEndpoint { inner }
    }
}

pub struct RequestLoggerEndpoint<E> {
    inner: E,
}

impl<E: Endpoint> Endpoint for RequestLoggerEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.original_uri().path().to_string();
        let remote_addr = req.remote_addr().to_string();
        let request_id = req
            .data::<ReqId>()
            .map(ToString::to_string)
            .unwrap_or_default();

        let result = self
            .inner
            .call(req)
            .await
            .map(IntoResponse::into_response);
        let status = match &result {
            Ok(response) => response.status(),
            Err(err) => err.status(),
        };
        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;

        if status.is_server_error() {
            error!(
                request_id = %request_id,
                remote_addr = %remote_addr,
                method = %method,
                path = %path,
                status = status.as_u16(),
                latency_ms,
                "HTTP request"
            );
        } else {
            info!(
                request_id = %request_id,
                remote_addr = %remote_addr,
                method = %method,
                path = %path,
                status = status.as_u16(),
                latency_ms,
                "HTTP request"
            );
        }

        result
    }
}

/// Answers `408 Request Timeout` when a handler runs past its budget.
pub struct RequestTimeout {
    timeout: Duration,
}

impl RequestTimeout {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl<E: Endpoint> Middleware<E> for RequestTimeout {
    type Output = RequestTimeoutEndpoint<E>;

    fn transform(&self, inner: E) -> Self::Output {
        RequestTimeoutEndpoint {
            inner,
            timeout: self.timeout,
        }
    }
}

pub struct RequestTimeoutEndpoint<E> {
    inner: E,
    timeout: Duration,
}

impl<E: Endpoint> Endpoint for RequestTimeoutEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        match tokio::time::timeout(self.timeout, self.inner.call(req)).await {
            Ok(result) => result.map(IntoResponse::into_response),
            Err(_) => Err(Error::from_status(StatusCode::REQUEST_TIMEOUT)),
        }
    }
}
