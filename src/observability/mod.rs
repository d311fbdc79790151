//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!     → request spans from tower_http::trace (request ID, method, path)
//!
//! Consumers:
//!     → logging.rs subscriber (stdout)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line of a request
//! - Bot tokens are redacted from logged paths

pub mod logging;
