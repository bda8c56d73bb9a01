//! Deterministic, rule-ordered specialization detector.

use std::sync::Arc;

use super::{
    MedicalSystem, PatternTable, SpecializationResult, PARTIAL_MATCH_CONFIDENCE,
    RULE_MATCH_CONFIDENCE,
};

/// Classifies free-text qualification strings against a [`PatternTable`].
///
/// Two passes over the groups in table order: strict patterns at
/// [`RULE_MATCH_CONFIDENCE`], then loose substrings at
/// [`PARTIAL_MATCH_CONFIDENCE`]. Never fails; unmatched input yields
/// [`SpecializationResult::unknown`].
#[derive(Debug, Clone)]
pub struct PatternClassifier {
    table: Arc<PatternTable>,
}

impl PatternClassifier {
    pub fn new(table: Arc<PatternTable>) -> Self {
        Self { table }
    }

    /// Classifier over the production table.
    pub fn standard() -> Self {
        Self::new(PatternTable::standard())
    }

    pub fn classify(&self, qualification: &str) -> SpecializationResult {
        let normalized = qualification.trim().to_uppercase();
        if normalized.is_empty() {
            return SpecializationResult::unknown();
        }

        if let Some((system, token)) = self.first_match(&normalized, |g, q| g.strict_match(q)) {
            return SpecializationResult::rule_based(system, RULE_MATCH_CONFIDENCE, vec![token]);
        }

        if let Some((system, token)) = self.first_match(&normalized, |g, q| g.loose_match(q)) {
            return SpecializationResult::rule_based(system, PARTIAL_MATCH_CONFIDENCE, vec![token]);
        }

        SpecializationResult::unknown()
    }

    fn first_match<F>(&self, normalized: &str, matcher: F) -> Option<(MedicalSystem, String)>
    where
        F: for<'a> Fn(&'a super::PatternGroup, &str) -> Option<&'a str>,
    {
        self.table
            .groups()
            .iter()
            .find_map(|group| matcher(group, normalized).map(|token| (group.system, token.to_string())))
    }
}

impl Default for PatternClassifier {
    fn default() -> Self {
        Self::standard()
    }
}
