//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the onboarding domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - language-model transport used by the dialogue engine
//! - `SpecializationClassifier` - model-backed qualification classification
//! - `SuggestionAdvisor` - model-backed profile improvement advice
//! - `Translator` - localisation of user-facing strings

mod ai_provider;
mod specialization_classifier;
mod suggestion_advisor;
mod translator;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use specialization_classifier::SpecializationClassifier;
pub use suggestion_advisor::SuggestionAdvisor;
pub use translator::{
    translate_or_original, Translation, TranslationError, TranslationRequest, Translator,
};
