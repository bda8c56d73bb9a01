//! Mock Translator for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::onboarding::DEFAULT_LANGUAGE;
use crate::ports::{Translation, TranslationError, TranslationRequest, Translator};

/// Dictionary-backed translator. Unknown phrases come back untranslated.
#[derive(Debug, Clone, Default)]
pub struct MockTranslator {
    /// (target language, source text) -> translated text
    dictionary: HashMap<(String, String), String>,
    failure: Option<TranslationError>,
    calls: Arc<Mutex<Vec<TranslationRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A translator that fails every call with `error`.
    pub fn failing(error: TranslationError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn with_translation(
        mut self,
        target_language: impl Into<String>,
        text: impl Into<String>,
        translated: impl Into<String>,
    ) -> Self {
        self.dictionary
            .insert((target_language.into(), text.into()), translated.into());
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn get_calls(&self) -> Vec<TranslationRequest> {
        lock(&self.calls).clone()
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, request: TranslationRequest) -> Result<Translation, TranslationError> {
        lock(&self.calls).push(request.clone());

        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let source = request
            .source_language
            .clone()
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        let key = (request.target_language.clone(), request.text.clone());

        Ok(match self.dictionary.get(&key) {
            Some(text) => Translation {
                success: true,
                text: text.clone(),
                source_language: source,
                translated: true,
            },
            None => Translation::untranslated(request.text, source),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::translate_or_original;

    fn translator() -> MockTranslator {
        MockTranslator::new().with_translation("hi", "Clinic Information", "क्लिनिक की जानकारी")
    }

    #[tokio::test]
    async fn translates_known_phrases() {
        let translation = translator()
            .translate(TranslationRequest::new("Clinic Information", "hi"))
            .await
            .unwrap();
        assert!(translation.translated);
        assert_eq!(translation.text, "क्लिनिक की जानकारी");
    }

    #[tokio::test]
    async fn unknown_phrases_are_untranslated() {
        let translation = translator()
            .translate(TranslationRequest::new("Documents", "hi").from_language("en"))
            .await
            .unwrap();
        assert!(!translation.translated);
        assert_eq!(translation.text, "Documents");
    }

    mod fallback_helper {
        use super::*;

        #[tokio::test]
        async fn failure_keeps_original_text() {
            let translator = MockTranslator::failing(TranslationError::Timeout);
            let text = translate_or_original(&translator, "Clinic Information", "hi").await;
            assert_eq!(text, "Clinic Information");
            assert_eq!(translator.call_count(), 1);
        }

        #[tokio::test]
        async fn english_target_skips_the_port() {
            let translator = translator();
            let text = translate_or_original(&translator, "Clinic Information", "en").await;
            assert_eq!(text, "Clinic Information");
            assert_eq!(translator.call_count(), 0);
        }

        #[tokio::test]
        async fn success_returns_translation() {
            let translator = translator();
            let text = translate_or_original(&translator, "Clinic Information", "hi").await;
            assert_eq!(text, "क्लिनिक की जानकारी");
        }
    }
}
