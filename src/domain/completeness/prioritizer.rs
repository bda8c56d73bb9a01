//! Ranked remediation actions from a completeness report.

use serde::{Deserialize, Serialize};

use super::{CompletenessReport, MissingField};
use crate::domain::profile::ProfileField;

/// Upper bound on returned actions.
pub const MAX_ACTIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionPriority {
    High,
    Medium,
    Low,
}

/// One thing the practitioner should do next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub action: String,
    pub field: Option<ProfileField>,
    pub priority: ActionPriority,
    pub estimated_time: String,
    pub impact: String,
}

/// Turns missing fields and optional AI suggestions into at most
/// [`MAX_ACTIONS`] actions.
///
/// Order: critical gaps (high), important gaps (medium), AI suggestions
/// (medium), nice-to-have gaps (low). AI input never displaces a
/// deterministic critical gap.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionPrioritizer;

impl ActionPrioritizer {
    pub fn new() -> Self {
        Self
    }

    pub fn prioritize(
        &self,
        report: &CompletenessReport,
        ai_suggestions: Option<&[String]>,
    ) -> Vec<Action> {
        let mut actions: Vec<Action> = Vec::with_capacity(MAX_ACTIONS);

        for missing in &report.critical_missing {
            push_capped(&mut actions, field_action(missing, ActionPriority::High));
        }
        for missing in &report.important_missing {
            push_capped(&mut actions, field_action(missing, ActionPriority::Medium));
        }

        for suggestion in ai_suggestions.unwrap_or_default() {
            let text = suggestion.trim();
            if text.is_empty() || actions.iter().any(|a| a.action.eq_ignore_ascii_case(text)) {
                continue;
            }
            push_capped(
                &mut actions,
                Action {
                    action: text.to_string(),
                    field: None,
                    priority: ActionPriority::Medium,
                    estimated_time: "5-10 minutes".to_string(),
                    impact: "Suggested by profile analysis".to_string(),
                },
            );
        }

        for missing in &report.nice_to_have_missing {
            push_capped(&mut actions, field_action(missing, ActionPriority::Low));
        }

        actions
    }
}

fn push_capped(actions: &mut Vec<Action>, action: Action) {
    if actions.len() < MAX_ACTIONS {
        actions.push(action);
    }
}

fn field_action(missing: &MissingField, priority: ActionPriority) -> Action {
    let (estimated_time, impact) = match priority {
        ActionPriority::High => ("2-5 minutes", "Critical for profile completion"),
        ActionPriority::Medium => ("5-10 minutes", "Improves patient engagement"),
        ActionPriority::Low => ("1-2 minutes", "Rounds out your profile"),
    };
    Action {
        action: instruction_for(missing),
        field: Some(missing.field),
        priority,
        estimated_time: estimated_time.to_string(),
        impact: impact.to_string(),
    }
}

fn instruction_for(missing: &MissingField) -> String {
    let canned = match missing.field {
        ProfileField::Name => "Complete your full name",
        ProfileField::Email => "Verify your email address",
        ProfileField::Phone => "Add your phone number",
        ProfileField::Specialization => "Select your medical specialization",
        ProfileField::Qualification => "Add your medical qualification",
        ProfileField::RegistrationNumber => "Add your registration number",
        ProfileField::ClinicName => "Add your clinic name",
        ProfileField::ClinicAddress => "Add your clinic address",
        ProfileField::ProfilePhoto => "Upload a professional profile photo",
        ProfileField::Bio => "Write a professional bio",
        ProfileField::WorkingHours => "Set your working hours",
        ProfileField::ConsultationFees => "Add consultation fees",
        ProfileField::ExperienceYears => "Add your years of experience",
        ProfileField::ClinicCity => "Add your clinic's city",
        ProfileField::ClinicState => "Add your clinic's state",
        ProfileField::Documents => "Upload your professional documents",
        _ => return format!("Add your {}", missing.label.to_lowercase()),
    };
    canned.to_string()
}
