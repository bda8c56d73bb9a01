//! AnalyzeCompleteness query handler.
//!
//! Scores a profile, asks the suggestion port for advice and turns both into
//! a prioritized action list. A failing port falls back to locally built
//! suggestions.

use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::domain::completeness::{
    default_suggestions, estimate_completion_time, impact_score, optimization_tips, Action,
    ActionPrioritizer, AiSuggestions, CompletenessReport, CompletenessScorer, OptimizationTip,
};
use crate::domain::profile::ProfileSnapshot;
use crate::ports::SuggestionAdvisor;

/// Where the suggestions in a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionSource {
    Ai,
    Default,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletenessAnalysis {
    pub report: CompletenessReport,
    pub suggestions: AiSuggestions,
    pub suggestion_source: SuggestionSource,
    pub priority_actions: Vec<Action>,
    pub estimated_time_to_complete: String,
    pub impact_score: u8,
    pub optimization_tips: Vec<OptimizationTip>,
}

/// Handler for completeness analysis.
pub struct AnalyzeCompletenessHandler {
    scorer: CompletenessScorer,
    prioritizer: ActionPrioritizer,
    advisor: Option<Arc<dyn SuggestionAdvisor>>,
}

impl AnalyzeCompletenessHandler {
    pub fn new(scorer: CompletenessScorer, advisor: Arc<dyn SuggestionAdvisor>) -> Self {
        Self {
            scorer,
            prioritizer: ActionPrioritizer::new(),
            advisor: Some(advisor),
        }
    }

    /// Analysis without the suggestion port.
    pub fn offline(scorer: CompletenessScorer) -> Self {
        Self {
            scorer,
            prioritizer: ActionPrioritizer::new(),
            advisor: None,
        }
    }

    #[tracing::instrument(skip(self, profile), fields(practitioner_id = %profile.id))]
    pub async fn handle(&self, profile: &ProfileSnapshot) -> CompletenessAnalysis {
        let report = self.scorer.score(profile);
        let (suggestions, suggestion_source) = self.suggestions(profile, &report).await;

        let ai_actions = (suggestion_source == SuggestionSource::Ai)
            .then(|| suggestions.priority_actions.as_slice());
        let priority_actions = self.prioritizer.prioritize(&report, ai_actions);

        CompletenessAnalysis {
            priority_actions,
            estimated_time_to_complete: estimate_completion_time(profile),
            impact_score: impact_score(profile),
            optimization_tips: optimization_tips(),
            suggestions,
            suggestion_source,
            report,
        }
    }

    async fn suggestions(
        &self,
        profile: &ProfileSnapshot,
        report: &CompletenessReport,
    ) -> (AiSuggestions, SuggestionSource) {
        let Some(advisor) = &self.advisor else {
            return (default_suggestions(profile, report), SuggestionSource::Default);
        };

        match advisor.suggest(profile, report).await {
            Ok(suggestions) if !suggestions.is_empty() => (suggestions, SuggestionSource::Ai),
            Ok(_) => (default_suggestions(profile, report), SuggestionSource::Default),
            Err(err) => {
                warn!(error = %err, "Suggestion port failed, using default suggestions");
                (default_suggestions(profile, report), SuggestionSource::Default)
            }
        }
    }
}
