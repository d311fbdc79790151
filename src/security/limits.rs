//! Inbound body limits.
//!
//! # Responsibilities
//! - Buffer an inbound body up to the configured maximum
//!
//! # Design Decisions
//! - Oversized bodies surface as a body-read failure; each branch of the
//!   relay decides what the caller sees, so webhook senders still get 200

use axum::body::{Body, Bytes};

use crate::relay::ForwardError;

/// Read the whole body, failing once more than `limit` bytes arrive.
pub async fn read_body(body: Body, limit: usize) -> Result<Bytes, ForwardError> {
    axum::body::to_bytes(body, limit)
        .await
        .map_err(|e| ForwardError::Body(e.to_string()))
}
