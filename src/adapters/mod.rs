//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the onboarding domain to external systems:
//! - `ai` - Language-model providers and the ports built on them
//! - `translation` - Translation services

pub mod ai;
pub mod translation;

pub use ai::{
    LlmSpecializationClassifier, LlmSuggestionAdvisor, MockAIProvider, MockError, OpenAIConfig,
    OpenAIProvider,
};
pub use translation::{MockTranslator, PassthroughTranslator};
