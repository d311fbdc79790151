//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that every URL parses and uses http/https
//! - Catch deploy templates that were never filled in
//! - Validate value ranges (timeouts > 0, body limit > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::RelayConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("{field} '{value}' is not a valid http(s) URL: {reason}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("upstream.api_base must not carry a query or fragment")]
    UpstreamHasQuery,

    #[error("webhook.backend_base_url is not set")]
    MissingBackendUrl,

    #[error("webhook.backend_base_url still contains a template placeholder: {0}")]
    UnfilledPlaceholder(String),

    #[error("webhook.path '{0}' must start with '/'")]
    WebhookPath(String),

    #[error("timeouts.{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("security.max_body_size must be greater than zero")]
    ZeroBodyLimit,

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    LogLevel(String),
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match parse_http_url("upstream.api_base", &config.upstream.api_base) {
        Ok(url) => {
            if url.query().is_some() || url.fragment().is_some() {
                errors.push(ValidationError::UpstreamHasQuery);
            }
        }
        Err(e) => errors.push(e),
    }

    let backend = config.webhook.backend_base_url.trim();
    if backend.is_empty() {
        errors.push(ValidationError::MissingBackendUrl);
    } else if backend.contains("{{") {
        errors.push(ValidationError::UnfilledPlaceholder(backend.to_string()));
    } else if let Err(e) = parse_http_url("webhook.backend_base_url", backend) {
        errors.push(e);
    }

    if !config.webhook.path.starts_with('/') {
        errors.push(ValidationError::WebhookPath(config.webhook.path.clone()));
    }

    if config.timeouts.connect_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout("connect_secs"));
    }
    if config.timeouts.request_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout("request_secs"));
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn parse_http_url(field: &'static str, value: &str) -> Result<Url, ValidationError> {
    let invalid = |reason: String| ValidationError::InvalidUrl {
        field,
        value: value.to_string(),
        reason,
    };

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}
