//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::models::Person;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub person: Person,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            person: Person::default(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: TrackerConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Log level must not be empty".to_string(),
            ));
        }

        if !(self.person.weight > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "Weight must be greater than 0 (got {})",
                self.person.weight
            )));
        }

        if !(self.person.height > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "Height must be greater than 0 (got {})",
                self.person.height
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();

        assert_eq!(config.log_level, "info");
        assert_eq!(config.person.weight, 75.0);
        assert_eq!(config.person.height, 1.75);
    }

    #[test]
    fn test_config_validation_ok() {
        let config = TrackerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_weight() {
        let mut config = TrackerConfig::default();
        config.person.weight = 0.0;
        assert!(config.validate().is_err());

        config.person.weight = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_height() {
        let mut config = TrackerConfig::default();
        config.person.height = -1.75;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_empty_log_level() {
        let mut config = TrackerConfig::default();
        config.log_level = " ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "log_level = \"debug\"\n\n[person]\nname = \"Ivan\"\nweight = 80.5\nheight = 1.82\n"
        )
        .unwrap();

        let config = TrackerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.person, Person::new("Ivan", 80.5, 1.82));
    }

    #[test]
    fn test_config_from_file_rejects_invalid_person() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[person]\nweight = 0.0\nheight = 1.82\n").unwrap();

        assert!(matches!(
            TrackerConfig::from_file(file.path()),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_config_from_file_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "log_level = [").unwrap();

        assert!(matches!(
            TrackerConfig::from_file(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = TrackerConfig::load_or_default(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let config = TrackerConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        // Should be parseable
        let parsed: TrackerConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.person, parsed.person);
    }
}
