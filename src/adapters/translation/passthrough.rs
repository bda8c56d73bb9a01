//! Translator that leaves text as it is.

use async_trait::async_trait;

use crate::domain::onboarding::DEFAULT_LANGUAGE;
use crate::ports::{Translation, TranslationError, TranslationRequest, Translator};

/// Used when no translation service is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughTranslator;

impl PassthroughTranslator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Translator for PassthroughTranslator {
    async fn translate(&self, request: TranslationRequest) -> Result<Translation, TranslationError> {
        let source = request
            .source_language
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        Ok(Translation::untranslated(request.text, source))
    }
}
