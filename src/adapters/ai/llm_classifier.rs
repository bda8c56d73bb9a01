//! AI-backed SpecializationClassifier implementation

use async_trait::async_trait;
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::onboarding::{locate_json, ResponseSanitizer};
use crate::domain::specialization::{MedicalSystem, SpecializationResult, NO_MATCH_CONFIDENCE};
use crate::ports::{AIError, AIProvider, CompletionRequest, MessageRole, RequestMetadata, SpecializationClassifier};

const SYSTEM_PROMPT: &str =
    "You are a medical qualification analyzer. Return only valid JSON without explanations.";

/// Classifies qualifications by asking a language model.
pub struct LlmSpecializationClassifier {
    ai_provider: Arc<dyn AIProvider>,
    model: String,
    sanitizer: ResponseSanitizer,
}

#[derive(Debug, Deserialize)]
struct ClassificationPayload {
    #[serde(default)]
    specialization: String,
    #[serde(default)]
    confidence: f64,
    #[serde(default)]
    extracted_qualifications: Vec<String>,
}

impl LlmSpecializationClassifier {
    pub fn new(ai_provider: Arc<dyn AIProvider>, model: impl Into<String>) -> Self {
        Self {
            ai_provider,
            model: model.into(),
            sanitizer: ResponseSanitizer::new(),
        }
    }

    fn create_prompt(qualification: &str) -> String {
        format!(
            r#"Analyze this medical qualification text and determine the specialization: '{}'.
Return a JSON response with:
- specialization: one of 'Allopathy', 'Homeopathy', 'Ayurveda', 'Unani', 'Siddha' or 'Unknown'
- confidence: confidence score (0-1)
- extracted_qualifications: array of recognized qualifications
- suggested_specialization_text: cleaned specialization text"#,
            qualification.trim()
        )
    }

    fn parse_response(&self, content: &str) -> Result<SpecializationResult, AIError> {
        let sanitized = self
            .sanitizer
            .sanitize(content)
            .map_err(|e| AIError::parse(e.to_string()))?;
        let json = locate_json(&sanitized)
            .ok_or_else(|| AIError::parse("No JSON object in classification response"))?;
        let payload: ClassificationPayload = serde_json::from_str(json)
            .map_err(|e| AIError::parse(format!("Failed to parse classification: {}", e)))?;

        let system = MedicalSystem::from_str(&payload.specialization).unwrap_or(MedicalSystem::Unknown);
        // An unknown system never outranks a rule-based guess.
        let confidence = if system.is_known() {
            payload.confidence
        } else {
            payload.confidence.min(NO_MATCH_CONFIDENCE)
        };

        Ok(SpecializationResult::ai_based(
            system,
            confidence,
            payload.extracted_qualifications,
        ))
    }
}

#[async_trait]
impl SpecializationClassifier for LlmSpecializationClassifier {
    async fn classify(&self, qualification: &str) -> Result<SpecializationResult, AIError> {
        let request = CompletionRequest::new(RequestMetadata::anonymous())
            .with_system_prompt(SYSTEM_PROMPT)
            .with_message(MessageRole::User, Self::create_prompt(qualification))
            .with_model(self.model.clone())
            .with_max_tokens(200)
            .with_temperature(0.1);

        let response = self.ai_provider.complete(request).await?;
        self.parse_response(&response.content)
    }
}
