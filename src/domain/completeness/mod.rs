//! Completeness module - Weighted profile scoring and remediation actions.

mod insights;
mod prioritizer;
mod scorer;
mod weights;

pub use insights::{
    default_suggestions, estimate_completion_time, impact_score, optimization_tips, AiSuggestions,
    OptimizationTip,
};
pub use prioritizer::{Action, ActionPrioritizer, ActionPriority, MAX_ACTIONS};
pub use scorer::{CompletenessReport, CompletenessScorer, MissingField};
pub use weights::{FieldWeight, Tier, WeightTable};
