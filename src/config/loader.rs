//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read a TOML file into a configuration without validating it.
///
/// Callers that apply command-line overrides validate afterwards with [`validate`].
pub fn read_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: RelayConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Run semantic validation, wrapping failures as a [`ConfigError`].
pub fn validate(config: &RelayConfig) -> Result<(), ConfigError> {
    validate_config(config).map_err(ConfigError::Validation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "telegram-bot-proxy-{}-{}.toml",
            name,
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_read_valid_file() {
        let path = write_temp(
            "valid",
            r#"
            [listener]
            bind_address = "127.0.0.1:8443"

            [webhook]
            backend_base_url = "http://10.0.0.5:3000"
            "#,
        );

        let config = read_config(&path).unwrap();
        validate(&config).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8443");
        assert_eq!(
            config.webhook.target_url(),
            "http://10.0.0.5:3000/api/telegram/webhook"
        );
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_validate_reports_every_error() {
        let path = write_temp("invalid", "[listener]\nbind_address = \"nowhere\"\n");

        let err = validate(&read_config(&path).unwrap()).unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {}", other),
        }
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_read_reports_parse_errors() {
        let path = write_temp("broken", "[listener\n");
        assert!(matches!(read_config(&path), Err(ConfigError::Parse(_))));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = Path::new("/nonexistent/telegram-bot-proxy.toml");
        assert!(matches!(read_config(path), Err(ConfigError::Io(_))));
    }
}
