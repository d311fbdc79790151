//! Request classification.
//!
//! # Data Flow
//! ```text
//! Incoming request (method, path)
//!     → Route::classify (first match wins)
//!         OPTIONS            → Preflight
//!         POST /webhook      → Webhook
//!         "/" or ""          → Docs
//!         /bot<token>/<m...> → Proxy      (matcher.rs)
//!         anything else      → Invalid
//! ```
//!
//! # Design Decisions
//! - Classification is pure: no I/O, no allocation
//! - Order is significant; OPTIONS short-circuits every other rule

pub mod matcher;

use axum::http::Method;

/// Path that receives webhook updates from Telegram.
pub const WEBHOOK_PATH: &str = "/webhook";

/// What the relay should do with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// CORS preflight, answered locally.
    Preflight,
    /// Webhook update to forward to the backend.
    Webhook,
    /// Static documentation page.
    Docs,
    /// Bot API call to proxy upstream.
    Proxy,
    /// Path the upstream API would not understand.
    Invalid,
}

impl Route {
    /// Classify a request by method and path.
    pub fn classify(method: &Method, path: &str) -> Self {
        if method == Method::OPTIONS {
            Route::Preflight
        } else if method == Method::POST && path == WEBHOOK_PATH {
            Route::Webhook
        } else if path.is_empty() || path == "/" {
            Route::Docs
        } else if matcher::is_bot_api_path(path) {
            Route::Proxy
        } else {
            Route::Invalid
        }
    }
}
