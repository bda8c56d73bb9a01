//! Prompt construction for the dialogue model.
//!
//! The model never sees raw contact details: [`RedactedProfile`] masks email,
//! phone and registration number and reduces media to provided flags.

use serde::Serialize;

use super::language::{is_default_language, language_name};
use super::OnboardingStep;
use crate::domain::foundation::Percentage;
use crate::domain::profile::ProfileSnapshot;

const MASK: char = '*';
const VISIBLE_TAIL: usize = 4;

/// Profile view safe to embed in a prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RedactedProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialization: Option<String>,
    pub qualification: Option<String>,
    pub registration_number: Option<String>,
    pub experience_years: Option<u32>,
    pub clinic_name: Option<String>,
    pub clinic_address: Option<String>,
    pub clinic_city: Option<String>,
    pub clinic_state: Option<String>,
    pub working_hours: Option<serde_json::Value>,
    pub consultation_fees: Option<serde_json::Value>,
    pub profile_photo_provided: bool,
    pub documents_provided: bool,
}

impl RedactedProfile {
    pub fn from_profile(profile: &ProfileSnapshot) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.as_deref().map(mask_email),
            phone: profile.phone.as_deref().map(mask_tail),
            specialization: profile.specialization.clone(),
            qualification: profile.qualification.clone(),
            registration_number: profile.registration_number.as_deref().map(mask_tail),
            experience_years: profile.experience_years,
            clinic_name: profile.clinic_name.clone(),
            clinic_address: profile.clinic_address.clone(),
            clinic_city: profile.clinic_city.clone(),
            clinic_state: profile.clinic_state.clone(),
            working_hours: profile.working_hours.clone(),
            consultation_fees: profile.consultation_fees.clone(),
            profile_photo_provided: profile
                .profile_photo
                .as_deref()
                .is_some_and(|p| !p.trim().is_empty()),
            documents_provided: !profile.documents.is_empty(),
        }
    }
}

/// Everything the dialogue model is told about the practitioner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DialogueContext {
    pub current_step: OnboardingStep,
    pub completion_percentage: Percentage,
    pub profile: RedactedProfile,
}

impl DialogueContext {
    pub fn new(profile: &ProfileSnapshot, completion_percentage: Percentage) -> Self {
        Self {
            current_step: profile.onboarding_step,
            completion_percentage,
            profile: RedactedProfile::from_profile(profile),
        }
    }
}

/// Keeps the first character of the local part: `jane@x.com` -> `j***@x.com`.
pub fn mask_email(email: &str) -> String {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{first}***@{domain}")
        }
        None => "***".to_string(),
    }
}

/// Masks all but the last four characters.
pub fn mask_tail(value: &str) -> String {
    let chars: Vec<char> = value.trim().chars().collect();
    if chars.len() <= VISIBLE_TAIL {
        return MASK.to_string().repeat(VISIBLE_TAIL);
    }
    let hidden = chars.len() - VISIBLE_TAIL;
    std::iter::repeat(MASK)
        .take(hidden)
        .chain(chars[hidden..].iter().copied())
        .collect()
}

fn step_focus(step: OnboardingStep) -> &'static str {
    match step {
        OnboardingStep::Basic => {
            "Collect the doctor's full name, email, phone number and medical specialization."
        }
        OnboardingStep::Professional => {
            "Collect qualifications, medical registration number and years of experience."
        }
        OnboardingStep::Clinic => {
            "Collect clinic name, address, city, state and working hours."
        }
        OnboardingStep::Documents => {
            "Ask for a profile photo and supporting documents, then confirm the profile is complete."
        }
    }
}

/// System prompt for one dialogue turn.
pub fn system_prompt(ctx: &DialogueContext, language: &str) -> String {
    let profile_json =
        serde_json::to_string_pretty(&ctx.profile).unwrap_or_else(|_| "{}".to_string());

    let mut prompt = format!(
        "You are an AI assistant helping a doctor complete their registration on a practice management platform.\n\
         \n\
         Current step: {step}/4 ({title})\n\
         Profile completion: {percent}\n\
         \n\
         Current profile data:\n{profile_json}\n\
         \n\
         Your role:\n\
         - Guide the doctor through registration in a friendly, professional manner\n\
         - Extract structured information from their messages\n\
         - Ask for one or two missing details at a time\n\
         - Ask for confirmation before treating ambiguous information as final\n\
         \n\
         Focus for this step: {focus}\n\
         \n\
         Respond ONLY with a JSON object in this format:\n\
         {{\n\
           \"message\": \"your reply to the doctor\",\n\
           \"extracted_data\": {{\"field_name\": \"value\"}},\n\
           \"suggestions\": [\"short example reply\"],\n\
           \"requires_confirmation\": false,\n\
           \"next_step\": null\n\
         }}\n\
         \n\
         Use these keys in extracted_data when present: name, email, phone, specialization, \
         qualification, registration_number, experience_years, clinic_name, clinic_address, \
         clinic_city, clinic_state, clinic_pincode, working_hours, consultation_fees.\n\
         Set next_step to \"next\" only when every detail for the current step has been provided.",
        step = ctx.current_step.number(),
        title = ctx.current_step.title(),
        percent = ctx.completion_percentage,
        focus = step_focus(ctx.current_step),
    );

    if !is_default_language(language) {
        prompt.push_str(&format!(
            "\n\nRespond in {} language.",
            language_name(language)
        ));
    }
    prompt
}

/// User prompt for one dialogue turn.
pub fn user_prompt(message: &str, ctx: &DialogueContext) -> String {
    fn shown(value: &Option<String>) -> &str {
        value.as_deref().filter(|v| !v.trim().is_empty()).unwrap_or("Not provided")
    }

    let p = &ctx.profile;
    let experience = p
        .experience_years
        .map_or_else(|| "Not provided".to_string(), |y| format!("{y} years"));

    [
        format!("Doctor message: {}", message.trim()),
        String::new(),
        "Current information:".to_string(),
        format!("- Name: {}", shown(&p.name)),
        format!("- Email: {}", shown(&p.email)),
        format!("- Phone: {}", shown(&p.phone)),
        format!("- Specialization: {}", shown(&p.specialization)),
        format!("- Qualification: {}", shown(&p.qualification)),
        format!("- Registration Number: {}", shown(&p.registration_number)),
        format!("- Experience: {experience}"),
        format!("- Clinic Name: {}", shown(&p.clinic_name)),
        format!("- Clinic Address: {}", shown(&p.clinic_address)),
    ]
    .join("\n")
}
