//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod onboarding;

pub use onboarding::{
    // Commands
    ConversationEngine,
    ConversationTurn,
    DialogueSettings,
    TurnDegradation,
    // Queries
    AnalyzeCompletenessHandler,
    CompletenessAnalysis,
    DetectSpecializationHandler,
    DetectSpecializationQuery,
    DetectSpecializationResult,
    LocalizedProgress,
    ProgressHandler,
    SuggestionSource,
};
