//! Field weight table for completeness scoring.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::foundation::ValidationError;
use crate::domain::profile::ProfileField;

/// Priority tier derived from weight and the required flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Critical,
    Important,
    NiceToHave,
}

impl Tier {
    /// Required fields are critical; optional ones split on weight 2.
    pub fn of(weight: u32, required: bool) -> Self {
        if required {
            Tier::Critical
        } else if weight >= 2 {
            Tier::Important
        } else {
            Tier::NiceToHave
        }
    }
}

/// Scoring weight of one profile field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldWeight {
    pub field: ProfileField,
    pub weight: u32,
    pub required: bool,
}

impl FieldWeight {
    pub const fn new(field: ProfileField, weight: u32, required: bool) -> Self {
        Self {
            field,
            weight,
            required,
        }
    }

    pub fn tier(&self) -> Tier {
        Tier::of(self.weight, self.required)
    }
}

/// Immutable scoring table. Entry order is the order missing fields are
/// reported in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTable {
    entries: Vec<FieldWeight>,
    total_weight: u32,
}

static STANDARD: Lazy<Arc<WeightTable>> = Lazy::new(|| {
    use ProfileField::*;
    let entries = [
        (Name, 3, true),
        (Email, 3, true),
        (Phone, 3, true),
        (Specialization, 3, true),
        (Qualification, 3, true),
        (RegistrationNumber, 3, true),
        (ClinicName, 3, true),
        (ClinicAddress, 3, true),
        (ProfilePhoto, 2, false),
        (Bio, 2, false),
        (WorkingHours, 2, false),
        (ConsultationFees, 2, false),
        (ExperienceYears, 2, false),
        (ClinicCity, 2, false),
        (ClinicState, 2, false),
        (DateOfBirth, 1, false),
        (Gender, 1, false),
        (ClinicPincode, 1, false),
        (ClinicPhone, 1, false),
        (Documents, 1, false),
    ]
    .into_iter()
    .map(|(field, weight, required)| FieldWeight::new(field, weight, required))
    .collect();
    Arc::new(WeightTable::from_validated(entries))
});

impl WeightTable {
    /// Builds a table, rejecting zero weights and repeated fields.
    pub fn new(entries: Vec<FieldWeight>) -> Result<Self, ValidationError> {
        if entries.is_empty() {
            return Err(ValidationError::empty_field("field_weights"));
        }
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.weight == 0 {
                return Err(ValidationError::out_of_range(
                    entry.field.as_str(),
                    1,
                    i32::MAX,
                    0,
                ));
            }
            if !seen.insert(entry.field) {
                return Err(ValidationError::duplicate(entry.field.as_str()));
            }
        }
        Ok(Self::from_validated(entries))
    }

    /// The production table, built once per process.
    pub fn standard() -> Arc<WeightTable> {
        Arc::clone(&STANDARD)
    }

    fn from_validated(entries: Vec<FieldWeight>) -> Self {
        let total_weight = entries.iter().map(|e| e.weight).sum();
        Self {
            entries,
            total_weight,
        }
    }

    pub fn entries(&self) -> &[FieldWeight] {
        &self.entries
    }

    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    /// Fields of one tier, in table order.
    pub fn fields_in(&self, tier: Tier) -> impl Iterator<Item = ProfileField> + '_ {
        self.entries
            .iter()
            .filter(move |e| e.tier() == tier)
            .map(|e| e.field)
    }
}
