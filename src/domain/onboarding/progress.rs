//! Step-by-step progress view of a profile.

use serde::Serialize;

use super::{is_step_complete, OnboardingStep};
use crate::domain::completeness::CompletenessScorer;
use crate::domain::foundation::Percentage;
use crate::domain::profile::{ProfileField, ProfileSnapshot};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepProgress {
    pub number: u8,
    pub title: String,
    pub description: String,
    pub fields: Vec<ProfileField>,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    pub current_step: OnboardingStep,
    pub completion_percentage: Percentage,
    pub steps: Vec<StepProgress>,
    pub next_step: Option<OnboardingStep>,
    pub is_complete: bool,
}

pub fn progress_summary(profile: &ProfileSnapshot, scorer: &CompletenessScorer) -> ProgressSummary {
    let percentage = scorer.score(profile).percentage;
    let steps = OnboardingStep::ALL
        .iter()
        .map(|&step| StepProgress {
            number: step.number(),
            title: step.title().to_string(),
            description: step.description().to_string(),
            fields: step.fields().to_vec(),
            completed: is_step_complete(profile, step),
        })
        .collect();

    ProgressSummary {
        current_step: profile.onboarding_step,
        completion_percentage: percentage,
        steps,
        next_step: profile.onboarding_step.next(),
        is_complete: percentage.is_full(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_profile_has_nothing_done() {
        let summary = progress_summary(&ProfileSnapshot::default(), &CompletenessScorer::standard());
        assert_eq!(summary.current_step, OnboardingStep::Basic);
        assert_eq!(summary.completion_percentage, Percentage::ZERO);
        assert_eq!(summary.steps.len(), 4);
        assert!(summary.steps.iter().all(|s| !s.completed));
        assert_eq!(summary.next_step, Some(OnboardingStep::Professional));
        assert!(!summary.is_complete);
    }

    #[test]
    fn completed_steps_are_flagged() {
        let profile = ProfileSnapshot {
            clinic_name: Some("City Medical Center".into()),
            clinic_address: Some("123 Main Street".into()),
            onboarding_step: OnboardingStep::Documents,
            ..ProfileSnapshot::default()
        };
        let summary = progress_summary(&profile, &CompletenessScorer::standard());
        let flags: Vec<bool> = summary.steps.iter().map(|s| s.completed).collect();
        assert_eq!(flags, vec![false, false, true, false]);
        assert_eq!(summary.next_step, None);
        assert_eq!(summary.steps[3].title, "Documents & Completion");
    }
}
