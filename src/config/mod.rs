//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → CLI overrides (main.rs)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → handed to Relay::new at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; it never changes for the process lifetime
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::{
    ListenerConfig, ObservabilityConfig, OutboundConfig, RelayConfig, SecurityConfig,
    TimeoutConfig, UpstreamConfig, WebhookConfig,
};
pub use validation::ValidationError;
