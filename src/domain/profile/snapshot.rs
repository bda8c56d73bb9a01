//! Immutable-per-call view of a practitioner record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ProfileField, ProfileUpdate};
use crate::domain::foundation::{DomainError, ErrorCode, PractitionerId};
use crate::domain::onboarding::{is_step_complete, OnboardingStage, OnboardingStep};

/// Borrowed, type-erased view of one field's value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Null,
    Text(&'a str),
    Number(f64),
    Date(NaiveDate),
    Sequence(&'a [String]),
    Json(&'a serde_json::Value),
}

impl FieldValue<'_> {
    /// Completion check shared by scoring and step predicates.
    ///
    /// Null is incomplete, text must be non-blank, sequences and mappings
    /// non-empty, numbers positive. Anything else non-null counts.
    pub fn is_complete(&self) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::Text(text) => !text.trim().is_empty(),
            FieldValue::Number(n) => *n > 0.0,
            FieldValue::Date(_) => true,
            FieldValue::Sequence(items) => !items.is_empty(),
            FieldValue::Json(value) => json_is_complete(value),
        }
    }
}

fn json_is_complete(value: &serde_json::Value) -> bool {
    use serde_json::Value;
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Number(n) => n.as_f64().map(|v| v > 0.0).unwrap_or(false),
        Value::Bool(_) => true,
    }
}

/// A practitioner's profile at one point in time.
///
/// Invariant: `onboarding_completed` is only true when `onboarding_step` is 4.
/// Every mutator returns a new snapshot. Deserializing requires `id`; every
/// other field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub id: PractitionerId,

    // Identity
    pub name: Option<String>,
    pub title: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,

    // Professional
    pub specialization: Option<String>,
    pub qualification: Option<String>,
    pub registration_number: Option<String>,
    pub experience_years: Option<u32>,
    pub bio: Option<String>,

    // Practice
    pub clinic_name: Option<String>,
    pub clinic_address: Option<String>,
    pub clinic_city: Option<String>,
    pub clinic_state: Option<String>,
    pub clinic_pincode: Option<String>,
    pub clinic_phone: Option<String>,
    pub working_hours: Option<serde_json::Value>,
    pub consultation_fees: Option<serde_json::Value>,

    // Media
    pub profile_photo: Option<String>,
    #[serde(default)]
    pub documents: Vec<String>,

    // Workflow
    #[serde(default)]
    pub onboarding_step: OnboardingStep,
    #[serde(default)]
    pub onboarding_completed: bool,
}

impl ProfileSnapshot {
    /// A freshly registered profile at step 1.
    pub fn new(id: PractitionerId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Borrowed value of `field`.
    pub fn value(&self, field: ProfileField) -> FieldValue<'_> {
        if let Some(text) = self.text_slot(field) {
            return text.as_deref().map_or(FieldValue::Null, FieldValue::Text);
        }
        match field {
            ProfileField::ExperienceYears => self
                .experience_years
                .map_or(FieldValue::Null, |years| FieldValue::Number(f64::from(years))),
            ProfileField::DateOfBirth => self.date_of_birth.map_or(FieldValue::Null, FieldValue::Date),
            ProfileField::WorkingHours => self.working_hours.as_ref().map_or(FieldValue::Null, FieldValue::Json),
            ProfileField::ConsultationFees => self
                .consultation_fees
                .as_ref()
                .map_or(FieldValue::Null, FieldValue::Json),
            ProfileField::Documents => FieldValue::Sequence(&self.documents),
            _ => FieldValue::Null,
        }
    }

    pub fn is_field_complete(&self, field: ProfileField) -> bool {
        self.value(field).is_complete()
    }

    /// Current position in the onboarding workflow.
    pub fn stage(&self) -> OnboardingStage {
        if self.onboarding_completed {
            OnboardingStage::Complete
        } else {
            OnboardingStage::from(self.onboarding_step)
        }
    }

    /// Returns a copy with `update` applied. Values that do not fit a field's
    /// type are skipped.
    pub fn apply(&self, update: &ProfileUpdate) -> ProfileSnapshot {
        let mut next = self.clone();
        for (field, value) in update.iter() {
            value.write_into(&mut next, *field);
        }
        next
    }

    /// Moves to the next step when the current step's predicate holds.
    pub fn advance_step(&self) -> Result<ProfileSnapshot, DomainError> {
        let current = self.onboarding_step;
        let next = current.next().ok_or_else(|| {
            DomainError::new(
                ErrorCode::InvalidStepTransition,
                "Step 4 is the last step; complete onboarding instead",
            )
        })?;
        if !is_step_complete(self, current) {
            return Err(DomainError::new(
                ErrorCode::StepIncomplete,
                format!("Step {} is not complete", current.number()),
            )
            .with_detail("step", current.number().to_string()));
        }
        Ok(ProfileSnapshot {
            onboarding_step: next,
            ..self.clone()
        })
    }

    /// Explicit external decrement. Clears the completed flag.
    pub fn rewind_to(&self, step: OnboardingStep) -> Result<ProfileSnapshot, DomainError> {
        if step >= self.onboarding_step && !self.onboarding_completed {
            return Err(DomainError::new(
                ErrorCode::InvalidStepTransition,
                format!(
                    "Cannot rewind from step {} to step {}",
                    self.onboarding_step.number(),
                    step.number()
                ),
            ));
        }
        Ok(ProfileSnapshot {
            onboarding_step: step,
            onboarding_completed: false,
            ..self.clone()
        })
    }

    /// Marks onboarding as finished. Only allowed at step 4.
    pub fn complete_onboarding(&self) -> Result<ProfileSnapshot, DomainError> {
        if self.onboarding_step != OnboardingStep::Documents {
            return Err(DomainError::new(
                ErrorCode::InvalidStepTransition,
                format!(
                    "Onboarding can only be completed at step 4, profile is at step {}",
                    self.onboarding_step.number()
                ),
            ));
        }
        Ok(ProfileSnapshot {
            onboarding_completed: true,
            ..self.clone()
        })
    }

    pub(crate) fn text_slot(&self, field: ProfileField) -> Option<&Option<String>> {
        Some(match field {
            ProfileField::Name => &self.name,
            ProfileField::Title => &self.title,
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Gender => &self.gender,
            ProfileField::Specialization => &self.specialization,
            ProfileField::Qualification => &self.qualification,
            ProfileField::RegistrationNumber => &self.registration_number,
            ProfileField::Bio => &self.bio,
            ProfileField::ClinicName => &self.clinic_name,
            ProfileField::ClinicAddress => &self.clinic_address,
            ProfileField::ClinicCity => &self.clinic_city,
            ProfileField::ClinicState => &self.clinic_state,
            ProfileField::ClinicPincode => &self.clinic_pincode,
            ProfileField::ClinicPhone => &self.clinic_phone,
            ProfileField::ProfilePhoto => &self.profile_photo,
            _ => return None,
        })
    }

    pub(crate) fn text_slot_mut(&mut self, field: ProfileField) -> Option<&mut Option<String>> {
        Some(match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Title => &mut self.title,
            ProfileField::FirstName => &mut self.first_name,
            ProfileField::LastName => &mut self.last_name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Gender => &mut self.gender,
            ProfileField::Specialization => &mut self.specialization,
            ProfileField::Qualification => &mut self.qualification,
            ProfileField::RegistrationNumber => &mut self.registration_number,
            ProfileField::Bio => &mut self.bio,
            ProfileField::ClinicName => &mut self.clinic_name,
            ProfileField::ClinicAddress => &mut self.clinic_address,
            ProfileField::ClinicCity => &mut self.clinic_city,
            ProfileField::ClinicState => &mut self.clinic_state,
            ProfileField::ClinicPincode => &mut self.clinic_pincode,
            ProfileField::ClinicPhone => &mut self.clinic_phone,
            ProfileField::ProfilePhoto => &mut self.profile_photo,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn step_one_complete() -> ProfileSnapshot {
        ProfileSnapshot {
            name: Some("Jane Roe".into()),
            email: Some("jane@example.com".into()),
            phone: Some("+91 98765 43210".into()),
            specialization: Some("Ayurveda".into()),
            ..ProfileSnapshot::default()
        }
    }

    mod field_values {
        use super::*;

        #[test]
        fn blank_text_is_incomplete() {
            let profile = ProfileSnapshot {
                bio: Some("   \n".into()),
                ..ProfileSnapshot::default()
            };
            assert!(!profile.is_field_complete(ProfileField::Bio));
            assert!(!profile.is_field_complete(ProfileField::Email));
        }

        #[test]
        fn zero_experience_is_incomplete() {
            let mut profile = ProfileSnapshot {
                experience_years: Some(0),
                ..ProfileSnapshot::default()
            };
            assert!(!profile.is_field_complete(ProfileField::ExperienceYears));
            profile.experience_years = Some(3);
            assert!(profile.is_field_complete(ProfileField::ExperienceYears));
        }

        #[test]
        fn json_values_follow_container_rules() {
            let mut profile = ProfileSnapshot {
                working_hours: Some(json!({})),
                consultation_fees: Some(json!(0)),
                ..ProfileSnapshot::default()
            };
            assert!(!profile.is_field_complete(ProfileField::WorkingHours));
            assert!(!profile.is_field_complete(ProfileField::ConsultationFees));

            profile.working_hours = Some(json!({"mon": "9-5"}));
            profile.consultation_fees = Some(json!(500));
            assert!(profile.is_field_complete(ProfileField::WorkingHours));
            assert!(profile.is_field_complete(ProfileField::ConsultationFees));

            profile.consultation_fees = Some(json!(true));
            assert!(profile.is_field_complete(ProfileField::ConsultationFees));
        }

        #[test]
        fn documents_need_at_least_one_entry() {
            let mut profile = ProfileSnapshot::default();
            assert!(!profile.is_field_complete(ProfileField::Documents));
            profile.documents.push("degree.pdf".into());
            assert!(profile.is_field_complete(ProfileField::Documents));
        }

        #[test]
        fn date_of_birth_is_complete_when_present() {
            let profile = ProfileSnapshot {
                date_of_birth: NaiveDate::from_ymd_opt(1985, 4, 12),
                ..ProfileSnapshot::default()
            };
            assert!(profile.is_field_complete(ProfileField::DateOfBirth));
        }
    }

    mod workflow {
        use super::*;

        #[test]
        fn new_profile_starts_at_step_one() {
            let profile = ProfileSnapshot::new(PractitionerId::new());
            assert_eq!(profile.onboarding_step, OnboardingStep::Basic);
            assert!(!profile.onboarding_completed);
            assert_eq!(profile.stage(), OnboardingStage::Basic);
        }

        #[test]
        fn advance_requires_current_step_predicate() {
            let mut profile = step_one_complete();
            profile.specialization = None;
            let err = profile.advance_step().unwrap_err();
            assert_eq!(err.code, ErrorCode::StepIncomplete);

            let advanced = step_one_complete().advance_step().unwrap();
            assert_eq!(advanced.onboarding_step, OnboardingStep::Professional);
        }

        #[test]
        fn advance_past_step_four_is_rejected() {
            let profile = ProfileSnapshot {
                onboarding_step: OnboardingStep::Documents,
                documents: vec!["licence.pdf".into()],
                ..ProfileSnapshot::default()
            };
            let err = profile.advance_step().unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidStepTransition);
        }

        #[test]
        fn complete_onboarding_only_at_step_four() {
            let err = step_one_complete().complete_onboarding().unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidStepTransition);

            let at_four = ProfileSnapshot {
                onboarding_step: OnboardingStep::Documents,
                ..ProfileSnapshot::default()
            };
            let done = at_four.complete_onboarding().unwrap();
            assert!(done.onboarding_completed);
            assert_eq!(done.stage(), OnboardingStage::Complete);
        }

        #[test]
        fn rewind_moves_backward_and_reopens() {
            let done = ProfileSnapshot {
                onboarding_step: OnboardingStep::Documents,
                onboarding_completed: true,
                ..ProfileSnapshot::default()
            };
            let rewound = done.rewind_to(OnboardingStep::Professional).unwrap();
            assert_eq!(rewound.onboarding_step, OnboardingStep::Professional);
            assert!(!rewound.onboarding_completed);
        }

        #[test]
        fn rewind_cannot_move_forward() {
            let profile = ProfileSnapshot {
                onboarding_step: OnboardingStep::Professional,
                ..ProfileSnapshot::default()
            };
            assert!(profile.rewind_to(OnboardingStep::Clinic).is_err());
            assert!(profile.rewind_to(OnboardingStep::Professional).is_err());
        }
    }

    #[test]
    fn deserializes_partial_record_with_defaults() {
        let profile: ProfileSnapshot = serde_json::from_value(json!({
            "id": "7f1d2c3e-4b5a-4c6d-8e9f-0a1b2c3d4e5f",
            "name": "Jane Roe",
            "onboarding_step": 2
        }))
        .unwrap();
        assert_eq!(profile.id.to_string(), "7f1d2c3e-4b5a-4c6d-8e9f-0a1b2c3d4e5f");
        assert_eq!(profile.name.as_deref(), Some("Jane Roe"));
        assert!(profile.email.is_none());
        assert_eq!(profile.onboarding_step, OnboardingStep::Professional);
        assert!(profile.documents.is_empty());
    }

    #[test]
    fn record_without_id_is_rejected() {
        let result: Result<ProfileSnapshot, _> = serde_json::from_value(json!({"name": "Jane Roe"}));
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_step_is_rejected_on_deserialize() {
        let result: Result<ProfileSnapshot, _> = serde_json::from_value(json!({
            "id": "7f1d2c3e-4b5a-4c6d-8e9f-0a1b2c3d4e5f",
            "onboarding_step": 5
        }));
        assert!(result.is_err());
    }
}
