//! Translation configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::onboarding::{find_language, DEFAULT_LANGUAGE};

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TranslationConfig {
    /// Language used when a request does not name one
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl TranslationConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if find_language(&self.default_language).is_none() {
            return Err(ValidationError::UnsupportedLanguage(
                self.default_language.clone(),
            ));
        }
        Ok(())
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
        }
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}
