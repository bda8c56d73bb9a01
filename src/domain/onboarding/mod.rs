//! Conversational onboarding: the step workflow and the pieces a dialogue
//! turn is assembled from.

mod field_map;
mod language;
mod next_action;
mod progress;
mod prompts;
mod reply;
mod starters;
mod step;

pub use field_map::{map_extracted, MappedFields};
pub use language::{
    find_language, is_default_language, language_name, supported_languages, Language,
    DEFAULT_LANGUAGE,
};
pub use next_action::{decide_next_action, ActionType, NextAction, TurnSignals};
pub use progress::{progress_summary, ProgressSummary, StepProgress};
pub use prompts::{mask_email, mask_tail, system_prompt, user_prompt, DialogueContext, RedactedProfile};
pub use reply::{
    locate_json, AssistantReply, ReplyParse, ReplyParseError, ReplyParser, ResponseSanitizer,
    SanitizationError, MAX_FIELD_LENGTH, MAX_RESPONSE_LENGTH,
};
pub use starters::conversation_starters;
pub use step::{is_step_complete, OnboardingStage, OnboardingStep};

/// Reply used when the dialogue model is unavailable.
pub const FALLBACK_MESSAGE: &str =
    "I understand you want to continue with your registration. Could you please provide more details?";

/// Suggestions paired with [`FALLBACK_MESSAGE`].
pub const FALLBACK_SUGGESTIONS: [&str; 3] = [
    "Tell me about your medical qualification",
    "What is your clinic name?",
    "Where is your practice located?",
];

/// Reply used when the model answered without any message text.
pub const EMPTY_REPLY_MESSAGE: &str =
    "I'm here to help you complete your registration. What would you like to tell me?";

/// Suggestions paired with [`EMPTY_REPLY_MESSAGE`].
pub const EMPTY_REPLY_SUGGESTIONS: [&str; 3] =
    ["My name is...", "I have MBBS degree", "My clinic is..."];
