//! The four-step onboarding workflow.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{StateMachine, ValidationError};
use crate::domain::profile::{ProfileField, ProfileSnapshot};

/// One of the four profile-completion steps. Serialized as its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OnboardingStep {
    Basic,
    Professional,
    Clinic,
    Documents,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 4] = [
        OnboardingStep::Basic,
        OnboardingStep::Professional,
        OnboardingStep::Clinic,
        OnboardingStep::Documents,
    ];

    /// 1-based step number.
    pub fn number(&self) -> u8 {
        match self {
            OnboardingStep::Basic => 1,
            OnboardingStep::Professional => 2,
            OnboardingStep::Clinic => 3,
            OnboardingStep::Documents => 4,
        }
    }

    pub fn next(&self) -> Option<OnboardingStep> {
        match self {
            OnboardingStep::Basic => Some(OnboardingStep::Professional),
            OnboardingStep::Professional => Some(OnboardingStep::Clinic),
            OnboardingStep::Clinic => Some(OnboardingStep::Documents),
            OnboardingStep::Documents => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            OnboardingStep::Basic => "Basic Information",
            OnboardingStep::Professional => "Professional Details",
            OnboardingStep::Clinic => "Clinic Information",
            OnboardingStep::Documents => "Documents & Completion",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OnboardingStep::Basic => "Tell us about yourself",
            OnboardingStep::Professional => "Share your medical qualifications",
            OnboardingStep::Clinic => "Tell us about your practice",
            OnboardingStep::Documents => "Upload documents and complete setup",
        }
    }

    /// Fields collected during this step, for progress display.
    pub fn fields(&self) -> &'static [ProfileField] {
        match self {
            OnboardingStep::Basic => &[
                ProfileField::Name,
                ProfileField::Email,
                ProfileField::Phone,
                ProfileField::Specialization,
            ],
            OnboardingStep::Professional => &[
                ProfileField::Qualification,
                ProfileField::RegistrationNumber,
                ProfileField::ExperienceYears,
            ],
            OnboardingStep::Clinic => &[
                ProfileField::ClinicName,
                ProfileField::ClinicAddress,
                ProfileField::WorkingHours,
            ],
            OnboardingStep::Documents => &[ProfileField::ProfilePhoto, ProfileField::Documents],
        }
    }
}

impl Default for OnboardingStep {
    fn default() -> Self {
        OnboardingStep::Basic
    }
}

impl TryFrom<u8> for OnboardingStep {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(OnboardingStep::Basic),
            2 => Ok(OnboardingStep::Professional),
            3 => Ok(OnboardingStep::Clinic),
            4 => Ok(OnboardingStep::Documents),
            other => Err(ValidationError::out_of_range("onboarding_step", 1, 4, other as i32)),
        }
    }
}

impl From<OnboardingStep> for u8 {
    fn from(step: OnboardingStep) -> Self {
        step.number()
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Workflow position including the terminal `Complete` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStage {
    Basic,
    Professional,
    Clinic,
    Documents,
    Complete,
}

impl OnboardingStage {
    /// The step this stage corresponds to; `None` once complete.
    pub fn step(&self) -> Option<OnboardingStep> {
        match self {
            OnboardingStage::Basic => Some(OnboardingStep::Basic),
            OnboardingStage::Professional => Some(OnboardingStep::Professional),
            OnboardingStage::Clinic => Some(OnboardingStep::Clinic),
            OnboardingStage::Documents => Some(OnboardingStep::Documents),
            OnboardingStage::Complete => None,
        }
    }

    /// The stage that follows a completed step.
    pub fn after(step: OnboardingStep) -> OnboardingStage {
        step.next().map_or(OnboardingStage::Complete, OnboardingStage::from)
    }
}

impl From<OnboardingStep> for OnboardingStage {
    fn from(step: OnboardingStep) -> Self {
        match step {
            OnboardingStep::Basic => OnboardingStage::Basic,
            OnboardingStep::Professional => OnboardingStage::Professional,
            OnboardingStep::Clinic => OnboardingStage::Clinic,
            OnboardingStep::Documents => OnboardingStage::Documents,
        }
    }
}

impl StateMachine for OnboardingStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Forward only, one step at a time.
    fn valid_transitions(&self) -> Vec<Self> {
        match self.step() {
            Some(step) => vec![OnboardingStage::after(step)],
            None => vec![],
        }
    }
}

/// Fixed completion predicate for each step.
pub fn is_step_complete(profile: &ProfileSnapshot, step: OnboardingStep) -> bool {
    let has = |field| profile.is_field_complete(field);
    match step {
        OnboardingStep::Basic => {
            has(ProfileField::Name)
                && has(ProfileField::Email)
                && has(ProfileField::Phone)
                && has(ProfileField::Specialization)
        }
        OnboardingStep::Professional => {
            has(ProfileField::Qualification) && has(ProfileField::RegistrationNumber)
        }
        OnboardingStep::Clinic => has(ProfileField::ClinicName) && has(ProfileField::ClinicAddress),
        OnboardingStep::Documents => has(ProfileField::ProfilePhoto) || has(ProfileField::Documents),
    }
}
