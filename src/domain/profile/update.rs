//! Proposed field changes produced by a conversation turn.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ProfileField, ProfileSnapshot};

/// A single proposed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldUpdate {
    Number(u32),
    Text(String),
    List(Vec<String>),
    Json(serde_json::Value),
}

impl FieldUpdate {
    /// Text rendering used for the turn's `extracted_fields` mapping.
    pub fn display_value(&self) -> String {
        match self {
            FieldUpdate::Text(text) => text.clone(),
            FieldUpdate::Number(n) => n.to_string(),
            FieldUpdate::List(items) => items.join(", "),
            FieldUpdate::Json(serde_json::Value::String(s)) => s.clone(),
            FieldUpdate::Json(value) => value.to_string(),
        }
    }

    pub(super) fn write_into(&self, profile: &mut ProfileSnapshot, field: ProfileField) {
        match field {
            ProfileField::ExperienceYears => {
                if let Some(years) = self.as_years() {
                    profile.experience_years = Some(years);
                }
            }
            ProfileField::DateOfBirth => {
                if let Some(date) = self.as_date() {
                    profile.date_of_birth = Some(date);
                }
            }
            ProfileField::WorkingHours => profile.working_hours = Some(self.to_json()),
            ProfileField::ConsultationFees => profile.consultation_fees = Some(self.to_json()),
            ProfileField::Documents => match self {
                FieldUpdate::List(items) => profile.documents = items.clone(),
                other => profile.documents.push(other.display_value()),
            },
            text_field => {
                if let Some(slot) = profile.text_slot_mut(text_field) {
                    *slot = Some(self.display_value());
                }
            }
        }
    }

    fn as_years(&self) -> Option<u32> {
        match self {
            FieldUpdate::Number(n) => Some(*n),
            FieldUpdate::Text(text) => leading_integer(text),
            FieldUpdate::Json(value) => value.as_u64().and_then(|n| u32::try_from(n).ok()),
            FieldUpdate::List(_) => None,
        }
    }

    fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldUpdate::Text(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok(),
            FieldUpdate::Json(serde_json::Value::String(text)) => {
                NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
            }
            _ => None,
        }
    }

    fn to_json(&self) -> serde_json::Value {
        match self {
            FieldUpdate::Json(value) => value.clone(),
            FieldUpdate::Text(text) => serde_json::Value::String(text.clone()),
            FieldUpdate::Number(n) => serde_json::Value::from(*n),
            FieldUpdate::List(items) => serde_json::Value::from(items.clone()),
        }
    }
}

/// Parses the integer a string starts with, e.g. "12 years" -> 12.
pub(crate) fn leading_integer(text: &str) -> Option<u32> {
    let digits: String = text
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Ordered set of proposed changes, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileUpdate {
    changes: BTreeMap<ProfileField, FieldUpdate>,
}

impl ProfileUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any earlier value for it.
    pub fn set(&mut self, field: ProfileField, value: FieldUpdate) {
        self.changes.insert(field, value);
    }

    pub fn with(mut self, field: ProfileField, value: FieldUpdate) -> Self {
        self.set(field, value);
        self
    }

    pub fn set_text(&mut self, field: ProfileField, value: impl Into<String>) {
        self.set(field, FieldUpdate::Text(value.into()));
    }

    pub fn get(&self, field: ProfileField) -> Option<&FieldUpdate> {
        self.changes.get(&field)
    }

    pub fn contains(&self, field: ProfileField) -> bool {
        self.changes.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProfileField, &FieldUpdate)> {
        self.changes.iter()
    }

    /// Field name to display value, the shape reported back to callers.
    pub fn to_display_map(&self) -> BTreeMap<String, String> {
        self.changes
            .iter()
            .map(|(field, value)| (field.as_str().to_string(), value.display_value()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn apply_writes_text_fields_and_leaves_source_untouched() {
        let profile = ProfileSnapshot::default();
        let update = ProfileUpdate::new()
            .with(ProfileField::ClinicName, FieldUpdate::Text("Sushruta Clinic".into()))
            .with(ProfileField::Email, FieldUpdate::Text("a@b.in".into()));

        let next = profile.apply(&update);

        assert_eq!(next.clinic_name.as_deref(), Some("Sushruta Clinic"));
        assert_eq!(next.email.as_deref(), Some("a@b.in"));
        assert_eq!(profile.clinic_name, None);
    }

    #[test]
    fn experience_text_uses_leading_integer() {
        let update = ProfileUpdate::new().with(
            ProfileField::ExperienceYears,
            FieldUpdate::Text("12 years".into()),
        );
        assert_eq!(ProfileSnapshot::default().apply(&update).experience_years, Some(12));
    }

    #[test]
    fn non_numeric_experience_is_skipped() {
        let profile = ProfileSnapshot {
            experience_years: Some(4),
            ..ProfileSnapshot::default()
        };
        let update = ProfileUpdate::new().with(
            ProfileField::ExperienceYears,
            FieldUpdate::Text("many".into()),
        );
        assert_eq!(profile.apply(&update).experience_years, Some(4));
    }

    #[test]
    fn json_fields_accept_text_and_structures() {
        let update = ProfileUpdate::new()
            .with(ProfileField::WorkingHours, FieldUpdate::Text("Mon-Sat 10-6".into()))
            .with(ProfileField::ConsultationFees, FieldUpdate::Json(json!({"first_visit": 500})));
        let next = ProfileSnapshot::default().apply(&update);
        assert_eq!(next.working_hours, Some(json!("Mon-Sat 10-6")));
        assert_eq!(next.consultation_fees, Some(json!({"first_visit": 500})));
    }

    #[test]
    fn document_text_is_appended() {
        let profile = ProfileSnapshot {
            documents: vec!["degree.pdf".into()],
            ..ProfileSnapshot::default()
        };
        let update = ProfileUpdate::new().with(ProfileField::Documents, FieldUpdate::Text("licence.pdf".into()));
        assert_eq!(profile.apply(&update).documents, vec!["degree.pdf", "licence.pdf"]);
    }

    #[test]
    fn date_of_birth_parses_iso_dates_only() {
        let good = ProfileUpdate::new().with(ProfileField::DateOfBirth, FieldUpdate::Text("1985-04-12".into()));
        let bad = ProfileUpdate::new().with(ProfileField::DateOfBirth, FieldUpdate::Text("April 1985".into()));
        assert_eq!(
            ProfileSnapshot::default().apply(&good).date_of_birth,
            NaiveDate::from_ymd_opt(1985, 4, 12)
        );
        assert_eq!(ProfileSnapshot::default().apply(&bad).date_of_birth, None);
    }

    #[test]
    fn display_map_uses_field_names() {
        let update = ProfileUpdate::new()
            .with(ProfileField::ExperienceYears, FieldUpdate::Number(7))
            .with(ProfileField::FirstName, FieldUpdate::Text("Jane".into()));
        let map = update.to_display_map();
        assert_eq!(map.get("experience_years").map(String::as_str), Some("7"));
        assert_eq!(map.get("first_name").map(String::as_str), Some("Jane"));
    }

    #[test]
    fn leading_integer_handles_edge_input() {
        assert_eq!(leading_integer(" 15+"), Some(15));
        assert_eq!(leading_integer("about 15"), None);
        assert_eq!(leading_integer(""), None);
    }
}
