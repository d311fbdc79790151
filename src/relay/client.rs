//! Outbound HTTP capability.
//!
//! # Responsibilities
//! - Define the one operation the relay needs from the network: send a
//!   buffered request, get a buffered response or an error
//! - Provide the production implementation on top of `reqwest`
//!
//! # Design Decisions
//! - Bodies are fully buffered in both directions (binary-safe, no streaming)
//! - Redirects are followed by the client, never by the relay
//! - No retries; one call means one attempt

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::http::header::CONTENT_LENGTH;
use axum::http::{Method, Request, Response};
use reqwest::redirect::Policy;
use thiserror::Error;

use crate::config::{OutboundConfig, RelayConfig, TimeoutConfig};
use crate::security::headers::{strip_for_forwarding, strip_hop_by_hop};

/// Maximum redirects followed per outbound call.
pub const MAX_REDIRECTS: usize = 10;

/// Failure to complete an outbound exchange.
///
/// The `Display` output is what callers see after `Error proxying request: `.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForwardError {
    /// Network, DNS, TLS or protocol failure talking to the remote side.
    #[error("{0}")]
    Transport(String),

    /// The inbound body could not be read.
    #[error("failed to read request body: {0}")]
    Body(String),

    /// The outbound request could not be constructed.
    #[error("invalid outbound request: {0}")]
    InvalidRequest(String),
}

/// Sends one HTTP request and returns the complete response.
pub trait HttpClient: Send + Sync + 'static {
    fn send(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>, ForwardError>> + Send;
}

impl<T: HttpClient> HttpClient for Arc<T> {
    fn send(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>, ForwardError>> + Send {
        (**self).send(request)
    }
}

/// `reqwest`-backed client used in production.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Build a client from the outbound and timeout sections.
    pub fn new(outbound: &OutboundConfig, timeouts: &TimeoutConfig) -> Result<Self, ForwardError> {
        let mut builder = reqwest::Client::builder().redirect(Policy::limited(MAX_REDIRECTS));

        if !outbound.use_system_proxy {
            builder = builder.no_proxy();
        }
        if let Some(secs) = timeouts.connect_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let inner = builder.build().map_err(|e| ForwardError::Transport(describe(&e)))?;
        Ok(Self { inner })
    }

    /// Build a client from the full relay configuration.
    pub fn from_config(config: &RelayConfig) -> Result<Self, ForwardError> {
        Self::new(&config.outbound, &config.timeouts)
    }
}

impl HttpClient for ReqwestClient {
    async fn send(&self, request: Request<Bytes>) -> Result<Response<Bytes>, ForwardError> {
        let (mut parts, body) = request.into_parts();
        strip_for_forwarding(&mut parts.headers);
        let is_head = parts.method == Method::HEAD;

        let mut outbound = self
            .inner
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers);
        if !body.is_empty() {
            outbound = outbound.body(body);
        }

        let upstream = outbound.send().await.map_err(transport_error)?;

        let status = upstream.status();
        let mut headers = upstream.headers().clone();
        let body = upstream.bytes().await.map_err(transport_error)?;

        strip_hop_by_hop(&mut headers);
        // A HEAD answer has no body to measure, so the upstream length stands.
        if !is_head {
            headers.remove(CONTENT_LENGTH);
        }

        let mut response = Response::new(body);
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}

/// Drop the URL (it carries the bot token) before the error is logged or returned.
fn transport_error(err: reqwest::Error) -> ForwardError {
    ForwardError::Transport(describe(&err.without_url()))
}

/// Flatten an error and its sources into one line.
fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
