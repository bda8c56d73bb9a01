//! ConversationEngine - processes one onboarding chat turn.
//!
//! A turn never fails. Dialogue port errors and timeouts become a canned
//! reply, unparseable replies degrade to plain text, and the returned
//! [`ConversationTurn`] always carries a usable message, the proposed profile
//! and the next workflow action.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::DetectSpecializationHandler;
use crate::domain::completeness::{CompletenessReport, CompletenessScorer};
use crate::domain::foundation::{DomainError, ErrorCode, StateMachine};
use crate::domain::onboarding::{
    decide_next_action, is_default_language, map_extracted, system_prompt, user_prompt,
    ActionType, AssistantReply, DialogueContext, NextAction, OnboardingStage, ReplyParse, ReplyParser,
    TurnSignals, EMPTY_REPLY_MESSAGE, EMPTY_REPLY_SUGGESTIONS, FALLBACK_MESSAGE,
    FALLBACK_SUGGESTIONS,
};
use crate::domain::profile::{ProfileField, ProfileSnapshot, ProfileUpdate};
use crate::domain::specialization::SpecializationResult;
use crate::ports::{
    translate_or_original, AIError, AIProvider, CompletionRequest, MessageRole, RequestMetadata,
    Translator,
};

/// Model parameters for the dialogue call.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogueSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Expiry is treated as a port failure.
    pub turn_timeout: Option<Duration>,
}

impl Default for DialogueSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4".to_string(),
            max_tokens: 500,
            temperature: 0.7,
            turn_timeout: None,
        }
    }
}

/// How a turn fell short of a full model reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnDegradation {
    /// The dialogue port failed or timed out.
    UpstreamUnavailable,
    /// The reply was not the expected JSON shape.
    MalformedUpstreamResponse,
}

impl TurnDegradation {
    pub fn code(&self) -> ErrorCode {
        match self {
            TurnDegradation::UpstreamUnavailable => ErrorCode::UpstreamUnavailable,
            TurnDegradation::MalformedUpstreamResponse => ErrorCode::MalformedUpstreamResponse,
        }
    }
}

/// Everything a caller needs after one turn. Persisting `updated_profile`
/// is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationTurn {
    pub assistant_reply: String,
    /// Applied field values, keyed by profile field name.
    pub extracted_fields: BTreeMap<String, String>,
    pub suggestions: Vec<String>,
    pub requires_confirmation: bool,
    pub next_action: NextAction,
    pub updated_profile: ProfileSnapshot,
    pub completeness: CompletenessReport,
    /// Backfill classification, when one ran.
    pub specialization: Option<SpecializationResult>,
    pub degraded: Option<TurnDegradation>,
}

/// Drives the onboarding conversation.
pub struct ConversationEngine {
    ai_provider: Arc<dyn AIProvider>,
    translator: Arc<dyn Translator>,
    detector: DetectSpecializationHandler,
    scorer: CompletenessScorer,
    parser: ReplyParser,
    settings: DialogueSettings,
}

impl ConversationEngine {
    pub fn new(
        ai_provider: Arc<dyn AIProvider>,
        translator: Arc<dyn Translator>,
        detector: DetectSpecializationHandler,
        scorer: CompletenessScorer,
    ) -> Self {
        Self {
            ai_provider,
            translator,
            detector,
            scorer,
            parser: ReplyParser::new(),
            settings: DialogueSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: DialogueSettings) -> Self {
        self.settings = settings;
        self
    }

    #[tracing::instrument(
        skip(self, message, profile),
        fields(practitioner_id = %profile.id, step = profile.onboarding_step.number())
    )]
    pub async fn process_turn(
        &self,
        message: &str,
        profile: &ProfileSnapshot,
        language: &str,
    ) -> ConversationTurn {
        let before = self.scorer.score(profile);
        let ctx = DialogueContext::new(profile, before.percentage);

        let (mut reply, degraded) = match self.call_dialogue(message, profile, &ctx, language).await {
            Ok(content) => match self.parser.parse(&content) {
                ReplyParse::Parsed(reply) => (reply, None),
                ReplyParse::Fallback { reply, reason } => {
                    debug!(reason = %reason, "Dialogue reply was not structured, using plain text");
                    (reply, Some(TurnDegradation::MalformedUpstreamResponse))
                }
            },
            Err(err) => {
                warn!(
                    error = %err,
                    retryable = err.is_retryable(),
                    "Dialogue port failed, using fallback reply"
                );
                let fallback = AssistantReply {
                    message: FALLBACK_MESSAGE.to_string(),
                    suggestions: FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
                    ..AssistantReply::default()
                };
                (fallback, Some(TurnDegradation::UpstreamUnavailable))
            }
        };

        if reply.message.trim().is_empty() {
            reply.message = EMPTY_REPLY_MESSAGE.to_string();
            if reply.suggestions.is_empty() {
                reply.suggestions = EMPTY_REPLY_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
            }
        }

        let mapped = map_extracted(&reply.extracted_data);
        if !mapped.ignored_keys.is_empty() {
            debug!(keys = ?mapped.ignored_keys, "Ignoring extracted keys with no profile field");
        }
        let mut update = mapped.update;
        let specialization = self.backfill_specialization(&mut update).await;

        let mut updated_profile = profile.apply(&update);
        let completeness = self.scorer.score(&updated_profile);

        let next_action = decide_next_action(
            &updated_profile,
            TurnSignals {
                fields_updated: !update.is_empty(),
                next_step_requested: reply.next_step.is_some(),
                confirmation_requested: reply.requires_confirmation,
            },
        );
        if next_action.action_type == ActionType::NextStep {
            updated_profile = advance(updated_profile, next_action.step);
        }

        info!(
            action = ?next_action.action_type,
            fields = update.len(),
            completion = completeness.percentage.value(),
            "Processed onboarding turn"
        );

        let (assistant_reply, suggestions) =
            self.localize(reply.message, reply.suggestions, language).await;

        ConversationTurn {
            assistant_reply,
            extracted_fields: update.to_display_map(),
            suggestions,
            requires_confirmation: reply.requires_confirmation,
            next_action,
            updated_profile,
            completeness,
            specialization,
            degraded,
        }
    }

    async fn call_dialogue(
        &self,
        message: &str,
        profile: &ProfileSnapshot,
        ctx: &DialogueContext,
        language: &str,
    ) -> Result<String, AIError> {
        let request = CompletionRequest::new(RequestMetadata::for_practitioner(profile.id))
            .with_system_prompt(system_prompt(ctx, language))
            .with_message(MessageRole::User, user_prompt(message, ctx))
            .with_model(self.settings.model.clone())
            .with_max_tokens(self.settings.max_tokens)
            .with_temperature(self.settings.temperature);

        let response = match self.settings.turn_timeout {
            Some(limit) => tokio::time::timeout(limit, self.ai_provider.complete(request))
                .await
                .map_err(|_| AIError::timeout(whole_seconds(limit)))??,
            None => self.ai_provider.complete(request).await?,
        };
        Ok(response.content)
    }

    /// Fills in the specialization from an extracted qualification when the
    /// model did not supply one.
    async fn backfill_specialization(
        &self,
        update: &mut ProfileUpdate,
    ) -> Option<SpecializationResult> {
        if update.contains(ProfileField::Specialization) {
            return None;
        }
        let qualification = update.get(ProfileField::Qualification)?.display_value();

        let result = self.detector.detect(&qualification).await;
        if result.is_auto_fillable() {
            debug!(
                specialization = %result.specialization,
                confidence = result.confidence,
                "Backfilled specialization from qualification"
            );
            update.set_text(ProfileField::Specialization, result.specialization.as_str());
        }
        Some(result)
    }

    async fn localize(
        &self,
        message: String,
        suggestions: Vec<String>,
        language: &str,
    ) -> (String, Vec<String>) {
        if is_default_language(language) {
            return (message, suggestions);
        }
        let translator = self.translator.as_ref();
        let message = translate_or_original(translator, &message, language).await;
        let mut localized = Vec::with_capacity(suggestions.len());
        for suggestion in &suggestions {
            localized.push(translate_or_original(translator, suggestion, language).await);
        }
        (message, localized)
    }
}

/// Timeout in whole seconds, rounded up so sub-second limits do not read as 0.
fn whole_seconds(limit: Duration) -> u32 {
    u32::try_from(limit.as_millis().div_ceil(1000)).unwrap_or(u32::MAX)
}

/// Moves a profile whose current step is complete to `target`.
fn advance(profile: ProfileSnapshot, target: OnboardingStage) -> ProfileSnapshot {
    let moved = profile
        .stage()
        .transition_to(target)
        .map_err(DomainError::from)
        .and_then(|stage| match stage {
            OnboardingStage::Complete => profile.complete_onboarding(),
            _ => profile.advance_step(),
        });
    match moved {
        Ok(next) => next,
        Err(err) => {
            warn!(error = %err, "Step transition rejected");
            profile
        }
    }
}
