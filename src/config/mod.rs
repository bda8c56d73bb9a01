//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PRACTICE_ONBOARDING` prefix and nested values use double underscores as separators.
//!
//! Scoring weights, classification patterns and confidence thresholds are not
//! configuration; they are fixed tables in the domain layer.
//!
//! # Example
//!
//! ```no_run
//! use practice_onboarding::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Dialogue model: {}", config.ai.dialogue_model);
//! ```

mod ai;
mod dialogue;
mod error;
mod features;
mod logging;
mod translation;

pub use ai::AiConfig;
pub use dialogue::DialogueConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use logging::{Environment, LoggingConfig};
pub use translation::TranslationConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults; only the OpenAI key must be supplied for
/// [`AppConfig::validate`] to pass.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// AI provider configuration (OpenAI)
    #[serde(default)]
    pub ai: AiConfig,

    /// Dialogue model parameters
    #[serde(default)]
    pub dialogue: DialogueConfig,

    /// Translation defaults
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log format and level
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PRACTICE_ONBOARDING` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PRACTICE_ONBOARDING__AI__OPENAI_API_KEY=sk-...` -> `ai.openai_api_key`
    /// - `PRACTICE_ONBOARDING__DIALOGUE__MAX_TOKENS=800` -> `dialogue.max_tokens = 800`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PRACTICE_ONBOARDING")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.dialogue.validate()?;
        self.translation.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.logging.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "PRACTICE_ONBOARDING__AI__OPENAI_API_KEY",
        "PRACTICE_ONBOARDING__AI__CLASSIFICATION_MODEL",
        "PRACTICE_ONBOARDING__DIALOGUE__MAX_TOKENS",
        "PRACTICE_ONBOARDING__DIALOGUE__TURN_TIMEOUT_SECS",
        "PRACTICE_ONBOARDING__LOGGING__ENVIRONMENT",
        "PRACTICE_ONBOARDING__FEATURES__TRANSLATION",
    ];

    fn set_minimal_env() {
        env::set_var("PRACTICE_ONBOARDING__AI__OPENAI_API_KEY", "sk-test-xxx");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        let key = config.ai.openai_api_key.as_ref().unwrap();
        assert_eq!(key.expose_secret(), "sk-test-xxx");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_section_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ai.dialogue_model, "gpt-4");
        assert_eq!(config.dialogue.max_tokens, 500);
        assert_eq!(config.translation.default_language, "en");
        assert_eq!(config.logging.environment, Environment::Development);
        assert!(config.features.ai_classification);
    }

    #[test]
    fn test_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("PRACTICE_ONBOARDING__AI__CLASSIFICATION_MODEL", "gpt-4o-mini");
        env::set_var("PRACTICE_ONBOARDING__DIALOGUE__MAX_TOKENS", "800");
        env::set_var("PRACTICE_ONBOARDING__DIALOGUE__TURN_TIMEOUT_SECS", "20");
        env::set_var("PRACTICE_ONBOARDING__FEATURES__TRANSLATION", "false");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ai.classification_model, "gpt-4o-mini");
        assert_eq!(config.dialogue.max_tokens, 800);
        assert_eq!(config.dialogue.turn_timeout_secs, Some(20));
        assert!(!config.features.translation);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("PRACTICE_ONBOARDING__LOGGING__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert!(config.logging.use_json());
    }

    #[test]
    fn test_validate_requires_api_key() {
        let config = AppConfig::default();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("OPENAI_API_KEY"))
        );
    }
}
