//! Request router/forwarder.
//!
//! # Data Flow
//! ```text
//! Request<Body> from the server
//!     → handler.rs (Route::classify, one branch per route)
//!         Preflight → fixed 204
//!         Webhook   → client.rs POST to backend, always 200
//!         Docs      → docs.rs static page
//!         Proxy     → client.rs call upstream, relay + CORS
//!         Invalid   → 400
//!     → Response<Body> back to the server
//! ```
//!
//! # Design Decisions
//! - Network access goes through the `HttpClient` trait so the handler is
//!   testable without sockets
//! - The relay holds immutable configuration only

pub mod client;
pub mod docs;
pub mod handler;

pub use client::{ForwardError, HttpClient, ReqwestClient};
pub use handler::Relay;
