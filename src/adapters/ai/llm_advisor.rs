//! AI-backed SuggestionAdvisor implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::completeness::{AiSuggestions, CompletenessReport};
use crate::domain::onboarding::{locate_json, ResponseSanitizer};
use crate::domain::profile::{ProfileField, ProfileSnapshot};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, MessageRole, RequestMetadata, SuggestionAdvisor,
};

const SYSTEM_PROMPT: &str = "You are a medical profile optimization expert. Analyze doctor profiles and provide actionable suggestions to improve completeness and patient engagement.";

/// Profile advice from a language model.
pub struct LlmSuggestionAdvisor {
    ai_provider: Arc<dyn AIProvider>,
    model: String,
    sanitizer: ResponseSanitizer,
}

impl LlmSuggestionAdvisor {
    pub fn new(ai_provider: Arc<dyn AIProvider>, model: impl Into<String>) -> Self {
        Self {
            ai_provider,
            model: model.into(),
            sanitizer: ResponseSanitizer::new(),
        }
    }

    fn create_prompt(profile: &ProfileSnapshot, report: &CompletenessReport) -> String {
        let profile_lines = ProfileField::ALL
            .iter()
            .filter(|field| profile.is_field_complete(**field))
            .map(|field| format!("- {}: {}", field.label(), describe(profile, *field)))
            .collect::<Vec<_>>()
            .join("\n");

        let missing_lines = report
            .missing_fields
            .iter()
            .map(|m| {
                format!(
                    "- {} (weight: {}, required: {})",
                    m.label,
                    m.weight,
                    if m.required { "yes" } else { "no" }
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"Analyze this doctor's profile and provide suggestions for improvement.

Profile completion: {}

Current profile data:
{}

Missing fields:
{}

Return a JSON response with:
{{
  "priority_actions": ["most important steps to complete the profile"],
  "engagement_suggestions": ["ways to make the profile more attractive to patients"],
  "professional_development": ["ways to strengthen professional credibility"],
  "impact_analysis": ["expected impact of completing the profile"]
}}"#,
            report.percentage,
            if profile_lines.is_empty() { "- None" } else { profile_lines.as_str() },
            if missing_lines.is_empty() { "- None" } else { missing_lines.as_str() },
        )
    }

    fn parse_response(&self, content: &str) -> Result<AiSuggestions, AIError> {
        let sanitized = self
            .sanitizer
            .sanitize(content)
            .map_err(|e| AIError::parse(e.to_string()))?;
        let json = locate_json(&sanitized)
            .ok_or_else(|| AIError::parse("No JSON object in suggestion response"))?;
        serde_json::from_str(json)
            .map_err(|e| AIError::parse(format!("Failed to parse suggestions: {}", e)))
    }
}

/// Display form of a completed field for the prompt.
fn describe(profile: &ProfileSnapshot, field: ProfileField) -> String {
    use crate::domain::profile::FieldValue;

    match profile.value(field) {
        FieldValue::Text(text) => text.trim().to_string(),
        FieldValue::Number(n) => n.to_string(),
        FieldValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        FieldValue::Sequence(items) => format!("{} item(s)", items.len()),
        FieldValue::Json(value) => value.to_string(),
        FieldValue::Null => String::new(),
    }
}

#[async_trait]
impl SuggestionAdvisor for LlmSuggestionAdvisor {
    async fn suggest(
        &self,
        profile: &ProfileSnapshot,
        report: &CompletenessReport,
    ) -> Result<AiSuggestions, AIError> {
        let request = CompletionRequest::new(RequestMetadata::for_practitioner(profile.id))
            .with_system_prompt(SYSTEM_PROMPT)
            .with_message(MessageRole::User, Self::create_prompt(profile, report))
            .with_model(self.model.clone())
            .with_max_tokens(800)
            .with_temperature(0.7);

        let response = self.ai_provider.complete(request).await?;
        self.parse_response(&response.content)
    }
}
