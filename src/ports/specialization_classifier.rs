//! AI Classification Port - model-backed specialization detection.

use async_trait::async_trait;

use super::AIError;
use crate::domain::specialization::SpecializationResult;

/// Classifies a free-text qualification into a medical system.
///
/// Only consulted when the rule-based pass is below the short-circuit
/// threshold. Implementations return `method = ai_based` results.
#[async_trait]
pub trait SpecializationClassifier: Send + Sync {
    async fn classify(&self, qualification: &str) -> Result<SpecializationResult, AIError>;
}
