//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling the optional ports
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Consult the AI classification port for weak rule matches
    #[serde(default = "default_enabled")]
    pub ai_classification: bool,

    /// Ask the suggestion advisor for AI-generated insights
    #[serde(default = "default_enabled")]
    pub ai_suggestions: bool,

    /// Localize user-facing strings through the translation port
    #[serde(default = "default_enabled")]
    pub translation: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            ai_classification: true,
            ai_suggestions: true,
            translation: true,
        }
    }
}

fn default_enabled() -> bool {
    true
}
