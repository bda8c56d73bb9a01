//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Environment name
    #[serde(default)]
    pub environment: Environment,

    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

/// Application environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl LoggingConfig {
    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// JSON output is forced in production.
    pub fn use_json(&self) -> bool {
        self.json || self.is_production()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::InvalidLogLevel(self.log_level.clone()));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.log_level, "info");
        assert!(!config.use_json());
    }

    #[test]
    fn test_production_forces_json() {
        let config = LoggingConfig {
            environment: Environment::Production,
            ..Default::default()
        };
        assert!(config.is_production());
        assert!(config.use_json());
    }

    #[test]
    fn test_environment_deserializes_lowercase() {
        let config: LoggingConfig =
            serde_json::from_str(r#"{"environment": "staging", "json": true}"#).unwrap();
        assert_eq!(config.environment, Environment::Staging);
        assert!(config.use_json());
    }

    #[test]
    fn test_blank_level_is_rejected() {
        let config = LoggingConfig {
            log_level: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
