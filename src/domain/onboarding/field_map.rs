//! Mapping of model-extracted keys onto profile fields.

use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::profile::{leading_integer, parse_name, FieldUpdate, ProfileField, ProfileUpdate};
use crate::domain::specialization::MedicalSystem;

/// How one extracted key is written to the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    /// Split into title, first and last name.
    Name,
    /// Bare address, also taken from `Name <address>`.
    Email,
    /// Leading integer only.
    Years,
    /// Canonical system name when recognised, raw text otherwise.
    Specialization,
    /// Structured when the value is JSON, text otherwise.
    Structured(ProfileField),
    Text(ProfileField),
}

fn target_for(key: &str) -> Option<Target> {
    let normalized = key.trim().to_ascii_lowercase().replace([' ', '-'], "_");
    let target = match normalized.as_str() {
        "name" | "full_name" => Target::Name,
        "email" => Target::Email,
        "phone" => Target::Text(ProfileField::Phone),
        "specialization" => Target::Specialization,
        "qualification" => Target::Text(ProfileField::Qualification),
        "registration_number" => Target::Text(ProfileField::RegistrationNumber),
        "experience" | "experience_years" => Target::Years,
        "clinic_name" => Target::Text(ProfileField::ClinicName),
        "clinic_address" => Target::Text(ProfileField::ClinicAddress),
        "clinic_city" => Target::Text(ProfileField::ClinicCity),
        "clinic_state" => Target::Text(ProfileField::ClinicState),
        "clinic_pincode" => Target::Text(ProfileField::ClinicPincode),
        "working_hours" => Target::Structured(ProfileField::WorkingHours),
        "consultation_fees" => Target::Structured(ProfileField::ConsultationFees),
        _ => return None,
    };
    Some(target)
}

/// Result of mapping one reply's extracted data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappedFields {
    pub update: ProfileUpdate,
    /// Keys with no profile counterpart, or values that could not be used.
    pub ignored_keys: Vec<String>,
}

/// Maps extracted key/value pairs onto a [`ProfileUpdate`].
pub fn map_extracted(data: &BTreeMap<String, String>) -> MappedFields {
    let mut mapped = MappedFields::default();

    for (key, raw) in data {
        let value = raw.trim();
        let applied = match (target_for(key), value.is_empty()) {
            (None, _) | (_, true) => false,
            (Some(target), false) => apply_target(&mut mapped.update, target, value),
        };
        if !applied {
            mapped.ignored_keys.push(key.clone());
        }
    }
    mapped
}

fn apply_target(update: &mut ProfileUpdate, target: Target, value: &str) -> bool {
    match target {
        Target::Name => {
            let parsed = parse_name(value);
            if parsed.full_name.is_empty() {
                return false;
            }
            if let Some(title) = parsed.title {
                update.set_text(ProfileField::Title, title);
            }
            if let Some(first) = parsed.first_name {
                update.set_text(ProfileField::FirstName, first);
            }
            if let Some(last) = parsed.last_name {
                update.set_text(ProfileField::LastName, last);
            }
            update.set_text(ProfileField::Name, parsed.full_name);
            true
        }
        Target::Email => match email_address(value) {
            Some(address) => {
                update.set_text(ProfileField::Email, address);
                true
            }
            None => false,
        },
        Target::Years => match leading_integer(value) {
            Some(years) => {
                update.set(ProfileField::ExperienceYears, FieldUpdate::Number(years));
                true
            }
            None => false,
        },
        Target::Specialization => {
            let text = value
                .parse::<MedicalSystem>()
                .map(|system| system.to_string())
                .unwrap_or_else(|_| value.to_string());
            update.set_text(ProfileField::Specialization, text);
            true
        }
        Target::Structured(field) => {
            let parsed = match serde_json::from_str::<Value>(value) {
                Ok(json @ (Value::Object(_) | Value::Array(_) | Value::Number(_))) => FieldUpdate::Json(json),
                _ => FieldUpdate::Text(value.to_string()),
            };
            update.set(field, parsed);
            true
        }
        Target::Text(field) => {
            update.set_text(field, value);
            true
        }
    }
}

fn email_address(value: &str) -> Option<&str> {
    let address = match (value.rfind('<'), value.rfind('>')) {
        (Some(open), Some(close)) if open < close => value[open + 1..close].trim(),
        _ => value,
    };
    (address.contains('@') && !address.contains(char::is_whitespace)).then_some(address)
}
