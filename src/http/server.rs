//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router sending every method and path to the relay
//! - Wire up middleware (request ID, tracing)
//! - Bind server to listener
//! - Graceful shutdown on the lifecycle broadcast

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware,
    response::Response,
    routing::any,
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::http::request::{
    mark_missing_request_id, propagate_request_id_layer, set_request_id_layer, RequestIdExt,
};
use crate::observability::logging::redact_bot_token;
use crate::relay::{ForwardError, HttpClient, Relay, ReqwestClient};

/// Application state injected into handlers.
pub struct AppState<C> {
    pub relay: Arc<Relay<C>>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            relay: self.relay.clone(),
        }
    }
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server with the production `reqwest` client.
    pub fn new(config: RelayConfig) -> Result<Self, ForwardError> {
        let client = ReqwestClient::from_config(&config)?;
        Ok(Self::with_client(config, client))
    }

    /// Create a server over any outbound client.
    pub fn with_client<C: HttpClient>(config: RelayConfig, client: C) -> Self {
        let relay = Arc::new(Relay::new(client, &config));

        tracing::info!(
            upstream = %config.upstream.base(),
            webhook_backend = %relay.webhook_url(),
            "Relay configured"
        );

        let router = Self::build_router(AppState { relay });
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router<C: HttpClient>(state: AppState<C>) -> Router {
        let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                request_id = %request.request_id(),
                method = %request.method(),
                path = %redact_bot_token(request.uri().path())
            )
        });

        Router::new()
            .route("/", any(relay_handler::<C>))
            .route("/{*path}", any(relay_handler::<C>))
            .fallback(relay_handler::<C>)
            .with_state(state)
            .layer(propagate_request_id_layer())
            .layer(trace)
            .layer(set_request_id_layer())
            .layer(middleware::map_request(mark_missing_request_id))
    }

    /// Run the server until the shutdown broadcast fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The assembled router, for driving the server without a socket.
    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Hands every request to the relay.
async fn relay_handler<C: HttpClient>(
    State(state): State<AppState<C>>,
    request: Request<Body>,
) -> Response {
    state.relay.handle(request).await
}
