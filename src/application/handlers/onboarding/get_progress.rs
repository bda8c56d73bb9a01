//! GetProgress query handler.
//!
//! Builds the step-by-step progress view and localises its user-facing text
//! through the translation port.

use futures::future::join_all;
use serde::Serialize;
use std::sync::Arc;

use crate::domain::completeness::CompletenessScorer;
use crate::domain::onboarding::{
    conversation_starters, language_name, progress_summary, ProgressSummary,
};
use crate::domain::profile::ProfileSnapshot;
use crate::ports::{translate_or_original, Translator};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalizedProgress {
    pub language: String,
    pub language_name: String,
    pub progress: ProgressSummary,
    /// Example messages for the current step.
    pub conversation_starters: Vec<String>,
}

/// Handler for progress queries.
pub struct ProgressHandler {
    scorer: CompletenessScorer,
    translator: Arc<dyn Translator>,
}

impl ProgressHandler {
    pub fn new(scorer: CompletenessScorer, translator: Arc<dyn Translator>) -> Self {
        Self { scorer, translator }
    }

    #[tracing::instrument(skip(self, profile), fields(practitioner_id = %profile.id))]
    pub async fn handle(&self, profile: &ProfileSnapshot, language: &str) -> LocalizedProgress {
        let mut progress = progress_summary(profile, &self.scorer);
        let translator = self.translator.as_ref();

        let titles = join_all(
            progress
                .steps
                .iter()
                .map(|s| translate_or_original(translator, &s.title, language)),
        )
        .await;
        let descriptions = join_all(
            progress
                .steps
                .iter()
                .map(|s| translate_or_original(translator, &s.description, language)),
        )
        .await;
        for ((step, title), description) in progress.steps.iter_mut().zip(titles).zip(descriptions) {
            step.title = title;
            step.description = description;
        }

        let conversation_starters = join_all(
            conversation_starters(profile.onboarding_step)
                .iter()
                .map(|text| translate_or_original(translator, text, language)),
        )
        .await;

        LocalizedProgress {
            language: language.to_string(),
            language_name: language_name(language).to_string(),
            progress,
            conversation_starters,
        }
    }
}
