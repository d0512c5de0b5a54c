//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::SinkConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
///
/// A missing file is not an error: every field has a default, so the sink
/// runs with its built-in configuration when no file is present.
pub fn load_config(path: &Path) -> Result<SinkConfig, ConfigError> {
    let config = if path.exists() {
        let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
        toml::from_str(&content).map_err(ConfigError::Parse)?
    } else {
        SinkConfig::default()
    };

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_config(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("traffic-sink-{}-{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = Path::new("/nonexistent/traffic-sink/config.toml");
        let config = load_config(path).unwrap();
        assert_eq!(config.listener.port, 8080);
    }

    #[test]
    fn file_values_override_defaults() {
        let path = temp_config(
            "override.toml",
            r#"
            [listener]
            host = "127.0.0.1"
            port = 9090

            [logging]
            level = "debug"
            "#,
        );
        let config = load_config(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.listener.bind_address(), "127.0.0.1:9090");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let path = temp_config("garbage.toml", "listener = not toml");
        let result = load_config(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn invalid_values_are_a_validation_error() {
        let path = temp_config(
            "invalid.toml",
            r#"
            [listener]
            port = 0
            "#,
        );
        let result = load_config(&path);
        fs::remove_file(&path).unwrap();
        match result {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors[0].field, "listener.port");
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }
}
