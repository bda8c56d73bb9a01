//! Secondary completeness insights: time estimates, impact, canned advice.

use serde::{Deserialize, Serialize};

use super::CompletenessReport;
use crate::domain::profile::{ProfileField, ProfileSnapshot};

const MINUTES_PER_FIELD: u32 = 5;

/// Fields counted by [`estimate_completion_time`].
const TIMED_FIELDS: [ProfileField; 12] = [
    ProfileField::Name,
    ProfileField::Email,
    ProfileField::Phone,
    ProfileField::Specialization,
    ProfileField::Qualification,
    ProfileField::RegistrationNumber,
    ProfileField::ClinicName,
    ProfileField::ClinicAddress,
    ProfileField::ProfilePhoto,
    ProfileField::Bio,
    ProfileField::WorkingHours,
    ProfileField::ConsultationFees,
];

const IMPACT_GROUPS: [(&[ProfileField], u32); 3] = [
    (
        &[
            ProfileField::Name,
            ProfileField::Email,
            ProfileField::Phone,
            ProfileField::Specialization,
            ProfileField::Qualification,
            ProfileField::RegistrationNumber,
            ProfileField::ClinicName,
            ProfileField::ClinicAddress,
        ],
        5,
    ),
    (
        &[
            ProfileField::ProfilePhoto,
            ProfileField::Bio,
            ProfileField::WorkingHours,
            ProfileField::ConsultationFees,
            ProfileField::ExperienceYears,
        ],
        6,
    ),
    (
        &[
            ProfileField::DateOfBirth,
            ProfileField::Gender,
            ProfileField::ClinicCity,
            ProfileField::ClinicState,
            ProfileField::ClinicPincode,
            ProfileField::ClinicPhone,
            ProfileField::Documents,
        ],
        4,
    ),
];

/// Advice returned by the suggestion port, or built locally when it fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiSuggestions {
    pub priority_actions: Vec<String>,
    pub engagement_suggestions: Vec<String>,
    pub professional_development: Vec<String>,
    pub impact_analysis: Vec<String>,
}

impl AiSuggestions {
    pub fn is_empty(&self) -> bool {
        self.priority_actions.is_empty()
            && self.engagement_suggestions.is_empty()
            && self.professional_development.is_empty()
            && self.impact_analysis.is_empty()
    }
}

/// Deterministic stand-in for the suggestion port.
pub fn default_suggestions(profile: &ProfileSnapshot, report: &CompletenessReport) -> AiSuggestions {
    let priority_actions = report
        .critical_missing
        .iter()
        .take(3)
        .map(|missing| format!("Complete {}", missing.label))
        .collect();

    let mut engagement_suggestions = Vec::new();
    if !profile.is_field_complete(ProfileField::Bio) {
        engagement_suggestions.push("Add a professional bio to build trust".to_string());
    }
    if !profile.is_field_complete(ProfileField::WorkingHours) {
        engagement_suggestions.push("Set your working hours for better patient scheduling".to_string());
    }
    if !profile.is_field_complete(ProfileField::ConsultationFees) {
        engagement_suggestions.push("Add consultation fees for transparency".to_string());
    }

    let mut professional_development = Vec::new();
    if !profile.is_field_complete(ProfileField::ExperienceYears) {
        professional_development.push("Add years of experience".to_string());
    }
    if !profile.is_field_complete(ProfileField::Documents) {
        professional_development.push("Upload professional documents".to_string());
    }

    AiSuggestions {
        priority_actions,
        engagement_suggestions,
        professional_development,
        impact_analysis: Vec::new(),
    }
}

/// Rough time to finish the core fields, e.g. "25 minutes" or "1 hour".
pub fn estimate_completion_time(profile: &ProfileSnapshot) -> String {
    let missing = TIMED_FIELDS
        .iter()
        .filter(|field| !profile.is_field_complete(**field))
        .count() as u32;
    format_minutes(missing * MINUTES_PER_FIELD)
}

fn format_minutes(total: u32) -> String {
    if total < 60 {
        return format!("{} minutes", total);
    }
    let hours = (f64::from(total) / 60.0 * 10.0).round() / 10.0;
    if (hours - 1.0).abs() < f64::EPSILON {
        "1 hour".to_string()
    } else {
        format!("{} hours", hours)
    }
}

/// Engagement impact score between 0 and 100.
pub fn impact_score(profile: &ProfileSnapshot) -> u8 {
    let score: u32 = IMPACT_GROUPS
        .iter()
        .map(|(fields, points)| {
            fields
                .iter()
                .filter(|field| profile.is_field_complete(**field))
                .count() as u32
                * points
        })
        .sum();
    score.min(100) as u8
}

/// One group of static profile optimisation tips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizationTip {
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tips: &'static [&'static str],
}

pub fn optimization_tips() -> Vec<OptimizationTip> {
    vec![
        OptimizationTip {
            category: "completeness",
            title: "Profile Completeness",
            description: "Complete all required fields to increase patient trust",
            tips: &[
                "Add a professional profile photo",
                "Write a compelling bio",
                "Set clear working hours",
                "Add consultation fees",
            ],
        },
        OptimizationTip {
            category: "engagement",
            title: "Patient Engagement",
            description: "Optimize your profile for better patient interaction",
            tips: &[
                "Use clear, professional language",
                "Highlight your specializations",
                "Add patient testimonials if available",
                "Keep information up-to-date",
            ],
        },
        OptimizationTip {
            category: "professional",
            title: "Professional Development",
            description: "Enhance your professional credibility",
            tips: &[
                "Upload relevant certificates",
                "Add professional achievements",
                "Keep qualifications updated",
                "Participate in medical communities",
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::completeness::CompletenessScorer;

    #[test]
    fn empty_profile_takes_an_hour() {
        assert_eq!(estimate_completion_time(&ProfileSnapshot::default()), "1 hour");
    }

    #[test]
    fn partially_filled_profile_counts_minutes() {
        let profile = ProfileSnapshot {
            name: Some("Jane".into()),
            email: Some("j@x.in".into()),
            phone: Some("1".into()),
            specialization: Some("Siddha".into()),
            qualification: Some("BSMS".into()),
            ..ProfileSnapshot::default()
        };
        assert_eq!(estimate_completion_time(&profile), "35 minutes");
    }

    #[test]
    fn long_durations_render_fractional_hours() {
        assert_eq!(format_minutes(90), "1.5 hours");
        assert_eq!(format_minutes(120), "2 hours");
        assert_eq!(format_minutes(0), "0 minutes");
    }

    #[test]
    fn impact_score_weights_groups() {
        assert_eq!(impact_score(&ProfileSnapshot::default()), 0);
        let profile = ProfileSnapshot {
            name: Some("Jane".into()),
            bio: Some("Vaidya".into()),
            gender: Some("female".into()),
            ..ProfileSnapshot::default()
        };
        assert_eq!(impact_score(&profile), 5 + 6 + 4);
    }

    #[test]
    fn default_suggestions_name_first_three_critical_gaps() {
        let profile = ProfileSnapshot::default();
        let report = CompletenessScorer::standard().score(&profile);
        let suggestions = default_suggestions(&profile, &report);
        assert_eq!(
            suggestions.priority_actions,
            vec!["Complete Full Name", "Complete Email Address", "Complete Phone Number"]
        );
        assert_eq!(suggestions.engagement_suggestions.len(), 3);
        assert_eq!(suggestions.professional_development.len(), 2);
    }

    #[test]
    fn ai_suggestions_tolerate_missing_keys() {
        let parsed: AiSuggestions =
            serde_json::from_str(r#"{"priority_actions": ["Add a photo"]}"#).unwrap();
        assert_eq!(parsed.priority_actions, vec!["Add a photo"]);
        assert!(parsed.impact_analysis.is_empty());
        assert!(!parsed.is_empty());
    }

    #[test]
    fn three_tip_groups() {
        let tips = optimization_tips();
        assert_eq!(tips.len(), 3);
        assert!(tips.iter().all(|t| t.tips.len() == 4));
    }
}
