//! Interactive onboarding console.
//!
//! Reads one chat message per line from stdin, runs it through the
//! conversation engine against an in-memory profile, and prints each turn as
//! JSON. `/progress` and `/analyze` print the progress summary and the
//! completeness analysis; `/detect <text>` classifies a qualification.

use anyhow::Context;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use practice_onboarding::adapters::{
    LlmSpecializationClassifier, LlmSuggestionAdvisor, OpenAIConfig, OpenAIProvider,
    PassthroughTranslator,
};
use practice_onboarding::application::{
    AnalyzeCompletenessHandler, ConversationEngine, DetectSpecializationHandler,
    DetectSpecializationQuery, DialogueSettings, ProgressHandler,
};
use practice_onboarding::config::{AppConfig, LoggingConfig};
use practice_onboarding::domain::completeness::CompletenessScorer;
use practice_onboarding::domain::foundation::PractitionerId;
use practice_onboarding::domain::profile::ProfileSnapshot;
use practice_onboarding::domain::specialization::ConfidenceArbiter;
use practice_onboarding::ports::{AIProvider, Translator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging);
    config.validate().context("invalid configuration")?;

    let api_key = config
        .ai
        .openai_api_key
        .clone()
        .context("PRACTICE_ONBOARDING__AI__OPENAI_API_KEY is not set")?;
    let provider: Arc<dyn AIProvider> = Arc::new(
        OpenAIProvider::new(
            OpenAIConfig::from_secret(api_key)
                .with_model(config.ai.dialogue_model.clone())
                .with_base_url(config.ai.base_url.clone())
                .with_timeout(config.ai.timeout()),
        )
        .context("failed to build OpenAI client")?,
    );
    let translator: Arc<dyn Translator> = Arc::new(PassthroughTranslator::new());
    let scorer = CompletenessScorer::standard();

    let detector = if config.features.ai_classification {
        DetectSpecializationHandler::new(
            ConfidenceArbiter::default(),
            Arc::new(LlmSpecializationClassifier::new(
                provider.clone(),
                config.ai.classification_model.clone(),
            )),
        )
    } else {
        DetectSpecializationHandler::rules_only(ConfidenceArbiter::default())
    };
    let analyzer = if config.features.ai_suggestions {
        AnalyzeCompletenessHandler::new(
            scorer.clone(),
            Arc::new(LlmSuggestionAdvisor::new(
                provider.clone(),
                config.ai.dialogue_model.clone(),
            )),
        )
    } else {
        AnalyzeCompletenessHandler::offline(scorer.clone())
    };
    let progress = ProgressHandler::new(scorer.clone(), translator.clone());
    let engine = ConversationEngine::new(provider, translator, detector.clone(), scorer)
        .with_settings(DialogueSettings {
            model: config.ai.dialogue_model.clone(),
            max_tokens: config.dialogue.max_tokens,
            temperature: config.dialogue.temperature,
            turn_timeout: config.dialogue.turn_timeout(),
        });

    let language = match std::env::args().nth(1) {
        Some(code) if config.features.translation => code,
        _ => config.translation.default_language.clone(),
    };
    let mut profile = ProfileSnapshot::new(PractitionerId::new());
    tracing::info!(practitioner_id = %profile.id, language = %language, "Onboarding session started");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let output = if line == "/progress" {
            serde_json::to_string_pretty(&progress.handle(&profile, &language).await)?
        } else if line == "/analyze" {
            serde_json::to_string_pretty(&analyzer.handle(&profile).await)?
        } else if let Some(text) = line.strip_prefix("/detect ") {
            let detected = detector.handle(DetectSpecializationQuery::new(text)).await;
            serde_json::to_string_pretty(&detected)?
        } else {
            let turn = engine.process_turn(line, &profile, &language).await;
            profile = turn.updated_profile.clone();
            serde_json::to_string_pretty(&turn)?
        };
        println!("{}", output);
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("practice_onboarding={}", logging.log_level).into()
    });

    let fmt_layer = if logging.use_json() {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
