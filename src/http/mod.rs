//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, every method/path to one handler)
//!     → request.rs (assign/propagate x-request-id)
//!     → relay::Relay::handle (classify, forward)
//!     → response.rs (CORS, plain-text results)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdExt, X_REQUEST_ID};
pub use server::HttpServer;
