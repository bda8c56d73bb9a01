//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The conversation turn is the only write path; everything else is a query
//! over a caller-supplied profile snapshot.

pub mod handlers;

pub use handlers::{
    AnalyzeCompletenessHandler, CompletenessAnalysis, ConversationEngine, ConversationTurn,
    DetectSpecializationHandler, DetectSpecializationQuery, DetectSpecializationResult,
    DialogueSettings, LocalizedProgress, ProgressHandler, SuggestionSource, TurnDegradation,
};
