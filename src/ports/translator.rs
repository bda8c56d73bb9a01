//! Translation Port - localises user-facing strings.
//!
//! Translation never drives logic. [`translate_or_original`] is the helper
//! callers use so a failed translation leaves the text unchanged.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub target_language: String,
    /// Detected by the translator when absent.
    pub source_language: Option<String>,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target_language: target_language.into(),
            source_language: None,
        }
    }

    pub fn from_language(mut self, source_language: impl Into<String>) -> Self {
        self.source_language = Some(source_language.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub success: bool,
    pub text: String,
    pub source_language: String,
    /// False when the text was returned as-is.
    pub translated: bool,
}

impl Translation {
    /// The input echoed back without translation.
    pub fn untranslated(text: impl Into<String>, source_language: impl Into<String>) -> Self {
        Self {
            success: true,
            text: text.into(),
            source_language: source_language.into(),
            translated: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslationError {
    #[error("translation service unavailable: {0}")]
    Unavailable(String),

    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("translation timed out")]
    Timeout,
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, request: TranslationRequest) -> Result<Translation, TranslationError>;
}

/// Translates `text` into `target_language`, returning it unchanged on any
/// failure or when the target is English.
pub async fn translate_or_original(
    translator: &dyn Translator,
    text: &str,
    target_language: &str,
) -> String {
    if text.trim().is_empty()
        || crate::domain::onboarding::is_default_language(target_language)
    {
        return text.to_string();
    }

    let request = TranslationRequest::new(text, target_language);
    match translator.translate(request).await {
        Ok(translation) if translation.success => translation.text,
        Ok(_) => text.to_string(),
        Err(err) => {
            tracing::warn!(error = %err, target_language, "Translation failed, keeping original text");
            text.to_string()
        }
    }
}
