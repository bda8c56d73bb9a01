//! Integration tests for the onboarding core.
//!
//! These tests drive the public handlers end to end with mock ports:
//! 1. A conversation survives an unavailable dialogue port
//! 2. Specialization detection short-circuits strong rule matches
//! 3. Qualification text backfills the specialization during a turn
//! 4. Step transitions are gated by the step predicates
//! 5. Completeness follows the weighted formula

use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use practice_onboarding::adapters::{MockAIProvider, MockError, PassthroughTranslator};
use practice_onboarding::application::{
    AnalyzeCompletenessHandler, ConversationEngine, DetectSpecializationHandler,
    DetectSpecializationQuery, ProgressHandler, SuggestionSource, TurnDegradation,
};
use practice_onboarding::domain::completeness::CompletenessScorer;
use practice_onboarding::domain::foundation::PractitionerId;
use practice_onboarding::domain::onboarding::{ActionType, OnboardingStage, OnboardingStep};
use practice_onboarding::domain::profile::ProfileSnapshot;
use practice_onboarding::domain::specialization::{
    ConfidenceArbiter, DetectionMethod, MedicalSystem, SpecializationResult,
};
use practice_onboarding::ports::{AIError, SpecializationClassifier};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Classification port that counts calls and always answers Unani.
#[derive(Default)]
struct CountingClassifier {
    calls: AtomicUsize,
}

#[async_trait]
impl SpecializationClassifier for CountingClassifier {
    async fn classify(&self, _qualification: &str) -> Result<SpecializationResult, AIError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(SpecializationResult::ai_based(MedicalSystem::Unani, 0.85, vec![]))
    }
}

fn engine_with(provider: MockAIProvider) -> ConversationEngine {
    ConversationEngine::new(
        Arc::new(provider),
        Arc::new(PassthroughTranslator::new()),
        DetectSpecializationHandler::rules_only(ConfidenceArbiter::default()),
        CompletenessScorer::standard(),
    )
}

fn fresh_profile() -> ProfileSnapshot {
    ProfileSnapshot::new(PractitionerId::new())
}

// =============================================================================
// Conversation
// =============================================================================

#[tokio::test]
async fn unavailable_dialogue_port_still_answers() {
    let engine = engine_with(MockAIProvider::failing(MockError::unavailable("503")));
    let profile = fresh_profile();

    let turn = engine
        .process_turn("Hi, I'm Dr. Jane Roe", &profile, "en")
        .await;

    assert!(!turn.assistant_reply.is_empty());
    assert!(turn.extracted_fields.is_empty());
    assert_eq!(turn.degraded, Some(TurnDegradation::UpstreamUnavailable));
    assert_eq!(turn.updated_profile, profile);

    let body = serde_json::to_value(&turn).unwrap();
    assert_eq!(body["extracted_fields"], json!({}));
    assert_eq!(body["next_action"]["type"], "continue");
    assert_eq!(body["degraded"], "upstream_unavailable");
}

#[tokio::test]
async fn full_conversation_reaches_completion() {
    let provider = MockAIProvider::new()
        .with_json_response(json!({
            "message": "Welcome, Dr. Roe!",
            "extracted_data": {
                "name": "Dr. Jane Roe",
                "email": "jane@example.com",
                "phone": "9876543210",
                "qualification": "BHMS"
            }
        }))
        .with_json_response(json!({"message": "Shall we continue?", "next_step": "professional"}))
        .with_json_response(json!({
            "message": "Noted.",
            "extracted_data": {"registration_number": "KA-12345", "experience": "8 years"},
        }))
        .with_json_response(json!({"message": "On to your clinic.", "next_step": "clinic"}))
        .with_json_response(json!({
            "message": "Lovely clinic.",
            "extracted_data": {"clinic_name": "Arogya", "clinic_address": "12 MG Road"},
            "next_step": "documents"
        }))
        .with_json_response(json!({"message": "Moving on.", "next_step": "documents"}));
    let engine = engine_with(provider);

    let mut profile = fresh_profile();
    let mut actions = Vec::new();
    for message in ["I'm Dr. Jane Roe", "yes", "KA-12345", "next", "Arogya", "next"] {
        let turn = engine.process_turn(message, &profile, "en").await;
        actions.push(turn.next_action.action_type);
        profile = turn.updated_profile;
    }

    assert_eq!(
        actions,
        vec![
            ActionType::UpdateProfile,
            ActionType::NextStep,
            ActionType::UpdateProfile,
            ActionType::NextStep,
            ActionType::UpdateProfile,
            ActionType::NextStep,
        ]
    );
    assert_eq!(profile.specialization.as_deref(), Some("Homeopathy"));
    assert_eq!(profile.experience_years, Some(8));
    assert_eq!(profile.onboarding_step, OnboardingStep::Documents);
    assert!(!profile.onboarding_completed);
}

#[tokio::test]
async fn qualification_backfills_specialization() {
    let engine = engine_with(MockAIProvider::new().with_json_response(json!({
        "message": "Thank you!",
        "extracted_data": {"qualification": "BSMS"}
    })));

    let turn = engine.process_turn("I hold a BSMS", &fresh_profile(), "en").await;

    assert_eq!(turn.updated_profile.specialization.as_deref(), Some("Siddha"));
    assert_eq!(turn.extracted_fields["qualification"], "BSMS");
    assert_eq!(turn.extracted_fields["specialization"], "Siddha");
    assert_eq!(turn.next_action.action_type, ActionType::UpdateProfile);
}

#[tokio::test]
async fn next_step_waits_for_specialization() {
    let engine = engine_with(
        MockAIProvider::new().with_json_response(json!({"message": "Next?", "next_step": "next"})),
    );
    let profile = ProfileSnapshot {
        name: Some("Jane Roe".into()),
        email: Some("jane@example.com".into()),
        phone: Some("9876543210".into()),
        ..fresh_profile()
    };

    let turn = engine.process_turn("Let's move on", &profile, "en").await;

    assert_eq!(turn.next_action.action_type, ActionType::Continue);
    assert_eq!(turn.next_action.step, OnboardingStage::Basic);
    assert_eq!(turn.updated_profile.onboarding_step, OnboardingStep::Basic);
}

// =============================================================================
// Specialization detection
// =============================================================================

#[tokio::test]
async fn strong_rule_match_skips_ai() {
    let classifier = Arc::new(CountingClassifier::default());
    let handler = DetectSpecializationHandler::new(ConfidenceArbiter::default(), classifier.clone());

    let detected = handler.handle(DetectSpecializationQuery::new("BHMS")).await;

    assert_eq!(detected.result.specialization, MedicalSystem::Homeopathy);
    assert_eq!(detected.result.confidence, 0.9);
    assert_eq!(detected.result.method, DetectionMethod::RuleBased);
    assert!(!detected.ai_consulted);
    assert!(detected.auto_fill);
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn weak_rule_match_defers_to_stronger_ai() {
    let classifier = Arc::new(CountingClassifier::default());
    let handler = DetectSpecializationHandler::new(ConfidenceArbiter::default(), classifier.clone());

    let detected = handler
        .handle(DetectSpecializationQuery::new("Certified herbal practitioner"))
        .await;

    assert!(detected.ai_consulted);
    assert_eq!(detected.result.specialization, MedicalSystem::Unani);
    assert_eq!(detected.result.method, DetectionMethod::AiBased);
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Completeness and progress
// =============================================================================

#[tokio::test]
async fn four_critical_fields_score_twelve_of_forty_three() {
    let handler = AnalyzeCompletenessHandler::offline(CompletenessScorer::standard());
    let profile = ProfileSnapshot {
        name: Some("Jane Roe".into()),
        email: Some("jane@example.com".into()),
        phone: Some("9876543210".into()),
        specialization: Some("Ayurveda".into()),
        ..fresh_profile()
    };

    let analysis = handler.handle(&profile).await;

    assert_eq!(analysis.report.completed_weight, 12);
    assert_eq!(analysis.report.total_weight, 43);
    assert_eq!(analysis.report.percentage.value(), 28);
    assert_eq!(analysis.suggestion_source, SuggestionSource::Default);
    assert!(analysis.priority_actions.len() <= 5);
}

#[tokio::test]
async fn progress_marks_completed_steps() {
    let handler = ProgressHandler::new(
        CompletenessScorer::standard(),
        Arc::new(PassthroughTranslator::new()),
    );
    let profile = ProfileSnapshot {
        name: Some("Jane Roe".into()),
        email: Some("jane@example.com".into()),
        phone: Some("9876543210".into()),
        specialization: Some("Unani".into()),
        onboarding_step: OnboardingStep::Professional,
        ..fresh_profile()
    };

    let localized = handler.handle(&profile, "en").await;

    assert_eq!(localized.progress.steps.len(), 4);
    assert!(localized.progress.steps[0].completed);
    assert!(!localized.progress.steps[1].completed);
    assert!(!localized.progress.is_complete);
    assert!(!localized.conversation_starters.is_empty());
}
