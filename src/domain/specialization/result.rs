//! Classification result and the confidence calibration constants.

use serde::{Deserialize, Serialize};

use super::MedicalSystem;

/// Confidence assigned when a strict pattern matches.
pub const RULE_MATCH_CONFIDENCE: f64 = 0.9;

/// Confidence assigned when only the loose substring pass matches.
pub const PARTIAL_MATCH_CONFIDENCE: f64 = 0.6;

/// Confidence of the `Unknown` fallback.
pub const NO_MATCH_CONFIDENCE: f64 = 0.3;

/// Rule results at or above this confidence skip the AI classification call.
///
/// Calibration parameter carried over from production; it has no documented
/// derivation and should be revisited against labelled data.
pub const AI_SHORT_CIRCUIT_THRESHOLD: f64 = 0.8;

/// Minimum confidence for writing a detected specialization onto a profile.
///
/// Shared by every auto-fill path. Calibration parameter, same caveat as
/// [`AI_SHORT_CIRCUIT_THRESHOLD`].
pub const AUTO_FILL_THRESHOLD: f64 = 0.7;

/// How a classification was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    RuleBased,
    AiBased,
}

/// Outcome of classifying one qualification string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecializationResult {
    pub specialization: MedicalSystem,
    /// Always within `[0, 1]`.
    pub confidence: f64,
    pub matched_qualifications: Vec<String>,
    pub method: DetectionMethod,
}

impl SpecializationResult {
    /// Builds a rule-based result.
    pub fn rule_based(specialization: MedicalSystem, confidence: f64, matched: Vec<String>) -> Self {
        Self {
            specialization,
            confidence: clamp_confidence(confidence),
            matched_qualifications: matched,
            method: DetectionMethod::RuleBased,
        }
    }

    /// Builds an AI-based result. Out-of-range confidences are clamped.
    pub fn ai_based(specialization: MedicalSystem, confidence: f64, matched: Vec<String>) -> Self {
        Self {
            specialization,
            confidence: clamp_confidence(confidence),
            matched_qualifications: matched,
            method: DetectionMethod::AiBased,
        }
    }

    /// The `Unknown` fallback returned when nothing matches.
    pub fn unknown() -> Self {
        Self::rule_based(MedicalSystem::Unknown, NO_MATCH_CONFIDENCE, Vec::new())
    }

    /// True when the result may be written onto a profile without asking.
    pub fn is_auto_fillable(&self) -> bool {
        self.specialization != MedicalSystem::Unknown && self.confidence >= AUTO_FILL_THRESHOLD
    }
}

fn clamp_confidence(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
