//! Onboarding dialogue configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Model parameters for the onboarding conversation
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DialogueConfig {
    /// Completion token limit per turn
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Caller-imposed limit on one dialogue call; expiry is a port failure
    #[serde(default)]
    pub turn_timeout_secs: Option<u64>,
}

impl DialogueConfig {
    pub fn turn_timeout(&self) -> Option<Duration> {
        self.turn_timeout_secs.map(Duration::from_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_tokens == 0 {
            return Err(ValidationError::InvalidMaxTokens);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature(self.temperature));
        }
        if self.turn_timeout_secs == Some(0) {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            turn_timeout_secs: None,
        }
    }
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f32 {
    0.7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialogue_defaults() {
        let config = DialogueConfig::default();
        assert_eq!(config.max_tokens, 500);
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.turn_timeout(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_turn_timeout_duration() {
        let config = DialogueConfig {
            turn_timeout_secs: Some(15),
            ..Default::default()
        };
        assert_eq!(config.turn_timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let zero_tokens = DialogueConfig {
            max_tokens: 0,
            ..Default::default()
        };
        assert_eq!(zero_tokens.validate(), Err(ValidationError::InvalidMaxTokens));

        let hot = DialogueConfig {
            temperature: 3.5,
            ..Default::default()
        };
        assert_eq!(hot.validate(), Err(ValidationError::InvalidTemperature(3.5)));

        let instant = DialogueConfig {
            turn_timeout_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(instant.validate(), Err(ValidationError::InvalidTimeout));
    }

    #[test]
    fn test_deserialization_fills_defaults() {
        let config: DialogueConfig = serde_json::from_str(r#"{"temperature": 0.2}"#).unwrap();
        assert_eq!(config.max_tokens, 500);
        assert_eq!(config.temperature, 0.2);
    }
}
