//! The relay request handler.
//!
//! Every inbound request passes through [`Relay::handle`] exactly once and
//! always comes back as a response; failures are mapped to status codes here
//! and never escape to the server.

use axum::body::{Body, Bytes};
use axum::http::header::{HeaderValue, CONTENT_TYPE};
use axum::http::{Method, Request, Response as HttpResponse, StatusCode, Uri};
use axum::response::Response;

use crate::config::RelayConfig;
use crate::http::request::{GeneratedRequestId, RequestIdExt, X_REQUEST_ID};
use crate::http::response::{self, apply_cors};
use crate::observability::logging::redact_bot_token;
use crate::relay::client::{ForwardError, HttpClient};
use crate::relay::docs;
use crate::routing::Route;
use crate::security::limits::read_body;

pub const WEBHOOK_FORWARDED: &str = "Webhook received and forwarded";
pub const WEBHOOK_FORWARD_FAILED: &str = "Error forwarding webhook";
pub const INVALID_BOT_REQUEST: &str = "Invalid bot request format";
pub const PROXY_ERROR_PREFIX: &str = "Error proxying request: ";

const DEFAULT_WEBHOOK_CONTENT_TYPE: &str = "application/json";

/// Routes requests to the webhook backend, the docs page or the upstream API.
#[derive(Debug)]
pub struct Relay<C> {
    client: C,
    api_base: String,
    webhook_url: String,
    max_body_size: usize,
}

impl<C: HttpClient> Relay<C> {
    /// Create a relay over `client` with endpoints taken from `config`.
    pub fn new(client: C, config: &RelayConfig) -> Self {
        Self {
            client,
            api_base: config.upstream.base().to_string(),
            webhook_url: config.webhook.target_url(),
            max_body_size: config.security.max_body_size,
        }
    }

    /// URL webhook updates are forwarded to.
    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    /// Handle one inbound request.
    pub async fn handle(&self, request: Request<Body>) -> Response {
        match Route::classify(request.method(), request.uri().path()) {
            Route::Preflight => response::preflight(),
            Route::Webhook => self.forward_webhook(request).await,
            Route::Docs => docs::page(),
            Route::Proxy => self.proxy(request).await,
            Route::Invalid => {
                tracing::debug!(
                    request_id = %request.request_id(),
                    path = %redact_bot_token(request.uri().path()),
                    "Rejected malformed bot path"
                );
                response::text(StatusCode::BAD_REQUEST, INVALID_BOT_REQUEST)
            }
        }
    }

    /// Forward a webhook update. The caller always gets 200.
    async fn forward_webhook(&self, request: Request<Body>) -> Response {
        let request_id = request.request_id().to_owned();

        match self.send_webhook(request).await {
            Ok(status) => {
                if status.is_success() {
                    tracing::debug!(request_id = %request_id, status = %status, "Webhook forwarded");
                } else {
                    tracing::warn!(
                        request_id = %request_id,
                        status = %status,
                        "Webhook backend answered with non-success status"
                    );
                }
                response::text(StatusCode::OK, WEBHOOK_FORWARDED)
            }
            Err(e) => {
                tracing::warn!(
                    request_id = %request_id,
                    backend = %self.webhook_url,
                    error = %e,
                    "Failed to forward webhook"
                );
                response::text(StatusCode::OK, WEBHOOK_FORWARD_FAILED)
            }
        }
    }

    async fn send_webhook(&self, request: Request<Body>) -> Result<StatusCode, ForwardError> {
        let (parts, body) = request.into_parts();
        let content_type = parts
            .headers
            .get(CONTENT_TYPE)
            .filter(|v| !v.is_empty())
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_WEBHOOK_CONTENT_TYPE));
        let body = read_body(body, self.max_body_size).await?;

        let outbound = Request::builder()
            .method(Method::POST)
            .uri(self.webhook_url.as_str())
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .map_err(|e| ForwardError::InvalidRequest(e.to_string()))?;

        let response = self.client.send(outbound).await?;
        Ok(response.status())
    }

    /// Proxy a Bot API call upstream and relay the answer with CORS headers.
    async fn proxy(&self, request: Request<Body>) -> Response {
        let request_id = request.request_id().to_owned();
        let method = request.method().clone();
        let path = request.uri().path().to_owned();

        match self.send_upstream(request).await {
            Ok(upstream) => {
                tracing::debug!(
                    request_id = %request_id,
                    method = %method,
                    status = %upstream.status(),
                    "Upstream responded"
                );
                let mut relayed = upstream.map(Body::from);
                apply_cors(relayed.headers_mut());
                relayed
            }
            Err(e) => {
                tracing::error!(
                    request_id = %request_id,
                    method = %method,
                    path = %redact_bot_token(&path),
                    error = %e,
                    "Upstream request failed"
                );
                response::text(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("{}{}", PROXY_ERROR_PREFIX, e),
                )
            }
        }
    }

    async fn send_upstream(&self, request: Request<Body>) -> Result<HttpResponse<Bytes>, ForwardError> {
        let (mut parts, body) = request.into_parts();
        let url = self.upstream_url(&parts.uri);

        // Only the client's own headers travel upstream.
        if parts.extensions.get::<GeneratedRequestId>().is_some() {
            parts.headers.remove(X_REQUEST_ID);
        }

        let body = if parts.method == Method::GET {
            Bytes::new()
        } else {
            read_body(body, self.max_body_size).await?
        };

        let mut outbound = Request::builder()
            .method(parts.method)
            .uri(url)
            .body(body)
            .map_err(|e| ForwardError::InvalidRequest(e.to_string()))?;
        *outbound.headers_mut() = parts.headers;

        self.client.send(outbound).await
    }

    /// `{api_base}{path}` plus `?{query}` when the request had one.
    fn upstream_url(&self, uri: &Uri) -> String {
        match uri.query().filter(|q| !q.is_empty()) {
            Some(query) => format!("{}{}?{}", self.api_base, uri.path(), query),
            None => format!("{}{}", self.api_base, uri.path()),
        }
    }
}
