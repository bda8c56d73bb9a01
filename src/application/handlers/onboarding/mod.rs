//! Onboarding command and query handlers.
//!
//! ## Commands
//! - `ProcessTurn` - Run one chat turn through the [`ConversationEngine`]
//!
//! ## Queries
//! - `DetectSpecialization` - Classify a qualification string
//! - `AnalyzeCompleteness` - Score a profile and rank improvement actions
//! - `GetProgress` - Per-step progress, localized

mod analyze_completeness;
mod detect_specialization;
mod get_progress;
mod process_turn;

pub use analyze_completeness::{
    AnalyzeCompletenessHandler, CompletenessAnalysis, SuggestionSource,
};
pub use detect_specialization::{
    DetectSpecializationHandler, DetectSpecializationQuery, DetectSpecializationResult,
};
pub use get_progress::{LocalizedProgress, ProgressHandler};
pub use process_turn::{ConversationEngine, ConversationTurn, DialogueSettings, TurnDegradation};
