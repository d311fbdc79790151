//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Choose the log level from `RUST_LOG` or configuration

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::routing::matcher::BOT_PREFIX;

/// Default filter when `RUST_LOG` is not set.
pub fn default_filter(config: &ObservabilityConfig) -> String {
    let level = config.log_level.to_ascii_lowercase();
    format!("telegram_bot_proxy={level},tower_http={level}")
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the config.
pub fn init(config: &ObservabilityConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(config).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Hide the bot token in a `/bot<token>/...` path before it reaches logs.
pub fn redact_bot_token(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if !trimmed.starts_with(BOT_PREFIX) {
        return path.to_string();
    }
    match trimmed.split_once('/') {
        Some((_, rest)) => format!("/bot<redacted>/{}", rest),
        None => "/bot<redacted>".to_string(),
    }
}
