//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → limits.rs (bounded body read)
//!     → relay (classify, forward)
//!     → headers.rs (strip hop-by-hop before the outbound hop)
//! ```
//!
//! # Design Decisions
//! - No authentication: credentials pass through to the upstream untouched
//! - Connection-scoped headers never leak across hops

pub mod headers;
pub mod limits;
