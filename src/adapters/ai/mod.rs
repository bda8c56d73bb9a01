//! AI Adapters.
//!
//! ## Available Adapters
//!
//! - `MockAIProvider` - Configurable mock for testing
//! - `OpenAIProvider` - OpenAI chat completions (GPT-4, GPT-3.5)
//! - `LlmSpecializationClassifier` - Classification port over any `AIProvider`
//! - `LlmSuggestionAdvisor` - Suggestion port over any `AIProvider`

mod llm_advisor;
mod llm_classifier;
mod mock_provider;
mod openai_provider;

pub use llm_advisor::LlmSuggestionAdvisor;
pub use llm_classifier::LlmSpecializationClassifier;
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
