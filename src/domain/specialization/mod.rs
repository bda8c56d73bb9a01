//! Specialization module - Medical system detection from qualification text.
//!
//! A deterministic [`PatternClassifier`] handles the common degrees; the
//! [`ConfidenceArbiter`] decides when an AI classification may override it.

mod arbiter;
mod catalog;
mod classifier;
mod medical_system;
mod patterns;
mod result;

pub use arbiter::ConfidenceArbiter;
pub use catalog::{suggest_qualifications, validate_qualification, QualificationCheck, QualificationSuggestions};
pub use classifier::PatternClassifier;
pub use medical_system::{MedicalSystem, SystemProfile};
pub use patterns::{PatternGroup, PatternTable};
pub use result::{
    DetectionMethod, SpecializationResult, AI_SHORT_CIRCUIT_THRESHOLD, AUTO_FILL_THRESHOLD,
    NO_MATCH_CONFIDENCE, PARTIAL_MATCH_CONFIDENCE, RULE_MATCH_CONFIDENCE,
};
