//! Telegram Bot API relay library.
//!
//! Proxies `/bot<token>/<method>` calls to the Bot API with permissive CORS,
//! forwards `/webhook` updates to a backend, and serves a documentation page.

pub mod config;
pub mod http;
pub mod routing;
pub mod relay;

pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use relay::{HttpClient, Relay};
