//! Arbitration between rule-based and AI classifications.

use super::{PatternClassifier, SpecializationResult, AI_SHORT_CIRCUIT_THRESHOLD};

/// Merges a [`PatternClassifier`] result with an optional AI result.
///
/// The rule result is always computed first. An AI result replaces it only
/// when strictly more confident; ties go to the rules.
#[derive(Debug, Clone, Default)]
pub struct ConfidenceArbiter {
    classifier: PatternClassifier,
}

impl ConfidenceArbiter {
    pub fn new(classifier: PatternClassifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &PatternClassifier {
        &self.classifier
    }

    /// Rule-only classification; callers use this to decide whether the AI
    /// classification port is worth calling at all.
    pub fn rule_result(&self, qualification: &str) -> SpecializationResult {
        self.classifier.classify(qualification)
    }

    /// Whether a rule result is weak enough to justify an AI call.
    pub fn needs_ai(&self, rule: &SpecializationResult) -> bool {
        rule.confidence < AI_SHORT_CIRCUIT_THRESHOLD
    }

    pub fn resolve(
        &self,
        qualification: &str,
        ai_result: Option<SpecializationResult>,
    ) -> SpecializationResult {
        Self::arbitrate(self.rule_result(qualification), ai_result)
    }

    /// Picks between an already computed rule result and an AI result.
    pub fn arbitrate(
        rule: SpecializationResult,
        ai_result: Option<SpecializationResult>,
    ) -> SpecializationResult {
        match ai_result {
            Some(ai) if ai.confidence > rule.confidence => ai,
            _ => rule,
        }
    }
}
