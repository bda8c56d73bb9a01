//! DetectSpecialization query handler.
//!
//! Runs the rule-based classifier and only consults the AI classification
//! port when the rules are not confident enough. Port failures degrade to
//! the rule result.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::specialization::{
    suggest_qualifications, ConfidenceArbiter, QualificationSuggestions, SpecializationResult,
    SystemProfile,
};
use crate::ports::SpecializationClassifier;

/// Query to classify one qualification string.
#[derive(Debug, Clone)]
pub struct DetectSpecializationQuery {
    pub qualification: String,
}

impl DetectSpecializationQuery {
    pub fn new(qualification: impl Into<String>) -> Self {
        Self {
            qualification: qualification.into(),
        }
    }
}

/// Classification plus reference data for the detected system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectSpecializationResult {
    pub result: SpecializationResult,
    /// Whether the AI classification port was called.
    pub ai_consulted: bool,
    /// Whether the port was called and failed.
    pub ai_failed: bool,
    pub auto_fill: bool,
    pub system_profile: Option<SystemProfile>,
    pub suggested_qualifications: QualificationSuggestions,
}

/// Handler for specialization detection.
#[derive(Clone)]
pub struct DetectSpecializationHandler {
    arbiter: ConfidenceArbiter,
    classifier: Option<Arc<dyn SpecializationClassifier>>,
}

impl DetectSpecializationHandler {
    /// Rule-only detection; the AI path is never taken.
    pub fn rules_only(arbiter: ConfidenceArbiter) -> Self {
        Self {
            arbiter,
            classifier: None,
        }
    }

    pub fn new(arbiter: ConfidenceArbiter, classifier: Arc<dyn SpecializationClassifier>) -> Self {
        Self {
            arbiter,
            classifier: Some(classifier),
        }
    }

    pub async fn handle(&self, query: DetectSpecializationQuery) -> DetectSpecializationResult {
        let (result, ai_consulted, ai_failed) = self.classify(&query.qualification).await;
        let system = result.specialization;

        DetectSpecializationResult {
            auto_fill: result.is_auto_fillable(),
            system_profile: system.is_known().then(|| system.profile()),
            suggested_qualifications: suggest_qualifications(system),
            result,
            ai_consulted,
            ai_failed,
        }
    }

    /// Classification alone, as used by the conversation engine.
    pub async fn detect(&self, qualification: &str) -> SpecializationResult {
        self.classify(qualification).await.0
    }

    async fn classify(&self, qualification: &str) -> (SpecializationResult, bool, bool) {
        let rule = self.arbiter.rule_result(qualification);

        if !self.arbiter.needs_ai(&rule) {
            debug!(
                specialization = %rule.specialization,
                confidence = rule.confidence,
                "Rule-based classification is authoritative, skipping AI"
            );
            return (rule, false, false);
        }

        let Some(classifier) = &self.classifier else {
            return (rule, false, false);
        };

        match classifier.classify(qualification).await {
            Ok(ai) => (ConfidenceArbiter::arbitrate(rule, Some(ai)), true, false),
            Err(err) => {
                warn!(
                    error = %err,
                    retryable = err.is_retryable(),
                    "AI specialization classification failed, using rule-based result"
                );
                (rule, true, true)
            }
        }
    }
}
