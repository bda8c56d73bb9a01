//! AI Suggestion Port - profile improvement advice.

use async_trait::async_trait;

use super::AIError;
use crate::domain::completeness::{AiSuggestions, CompletenessReport};
use crate::domain::profile::ProfileSnapshot;

#[async_trait]
pub trait SuggestionAdvisor: Send + Sync {
    /// Advice for `profile` given its current completeness.
    async fn suggest(
        &self,
        profile: &ProfileSnapshot,
        report: &CompletenessReport,
    ) -> Result<AiSuggestions, AIError>;
}
