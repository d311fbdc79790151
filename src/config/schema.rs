//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream Bot API settings.
    pub upstream: UpstreamConfig,

    /// Backend that receives forwarded webhook updates.
    pub webhook: WebhookConfig,

    /// Outbound HTTP client behaviour.
    pub outbound: OutboundConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Inbound request limits.
    pub security: SecurityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL every proxied path is appended to.
    pub api_base: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.telegram.org".to_string(),
        }
    }
}

impl UpstreamConfig {
    /// Base URL without a trailing slash, ready for `{base}{path}` joins.
    pub fn base(&self) -> &str {
        self.api_base.trim().trim_end_matches('/')
    }
}

/// Webhook backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Scheme and authority of the backend (e.g., "https://backend.example.com").
    pub backend_base_url: String,

    /// Path on the backend that receives updates.
    pub path: String,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            backend_base_url: String::new(),
            path: "/api/telegram/webhook".to_string(),
        }
    }
}

impl WebhookConfig {
    /// Full URL webhook payloads are POSTed to.
    pub fn target_url(&self) -> String {
        format!(
            "{}{}",
            self.backend_base_url.trim().trim_end_matches('/'),
            self.path
        )
    }
}

/// Outbound client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutboundConfig {
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub use_system_proxy: bool,
}

impl Default for OutboundConfig {
    fn default() -> Self {
        Self {
            use_system_proxy: true,
        }
    }
}

/// Timeout configuration for outbound calls.
///
/// Unset values leave the client default in place, which never times out.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: Option<u64>,

    /// Total time for an outbound request/response in seconds.
    pub request_secs: Option<u64>,
}

/// Inbound request limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum inbound body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 50 * 1024 * 1024, // Bot API upload ceiling
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
