//! Weighted completion scoring.

use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

use super::{Tier, WeightTable};
use crate::domain::foundation::Percentage;
use crate::domain::profile::{ProfileField, ProfileSnapshot};

/// A field that still needs a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingField {
    pub field: ProfileField,
    pub weight: u32,
    pub required: bool,
    pub label: &'static str,
}

impl MissingField {
    pub fn tier(&self) -> Tier {
        Tier::of(self.weight, self.required)
    }
}

/// Result of scoring one snapshot. Recomputed on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletenessReport {
    pub percentage: Percentage,
    pub completed_fields: BTreeSet<ProfileField>,
    /// In weight table order.
    pub missing_fields: Vec<MissingField>,
    pub critical_missing: Vec<MissingField>,
    pub important_missing: Vec<MissingField>,
    pub nice_to_have_missing: Vec<MissingField>,
    pub completed_weight: u32,
    pub total_weight: u32,
}

impl CompletenessReport {
    pub fn is_complete(&self) -> bool {
        self.missing_fields.is_empty()
    }
}

/// Scores profiles against a [`WeightTable`].
#[derive(Debug, Clone)]
pub struct CompletenessScorer {
    table: Arc<WeightTable>,
}

impl CompletenessScorer {
    pub fn new(table: Arc<WeightTable>) -> Self {
        Self { table }
    }

    pub fn standard() -> Self {
        Self::new(WeightTable::standard())
    }

    pub fn table(&self) -> &WeightTable {
        &self.table
    }

    pub fn score(&self, profile: &ProfileSnapshot) -> CompletenessReport {
        let mut completed_fields = BTreeSet::new();
        let mut missing_fields = Vec::new();
        let mut completed_weight = 0;

        for entry in self.table.entries() {
            if profile.is_field_complete(entry.field) {
                completed_fields.insert(entry.field);
                completed_weight += entry.weight;
            } else {
                missing_fields.push(MissingField {
                    field: entry.field,
                    weight: entry.weight,
                    required: entry.required,
                    label: entry.field.label(),
                });
            }
        }

        let of_tier = |tier: Tier| -> Vec<MissingField> {
            missing_fields
                .iter()
                .filter(|m| m.tier() == tier)
                .cloned()
                .collect()
        };
        let critical_missing = of_tier(Tier::Critical);
        let important_missing = of_tier(Tier::Important);
        let nice_to_have_missing = of_tier(Tier::NiceToHave);

        let total_weight = self.table.total_weight();
        CompletenessReport {
            percentage: Percentage::from_ratio(completed_weight, total_weight),
            completed_fields,
            missing_fields,
            critical_missing,
            important_missing,
            nice_to_have_missing,
            completed_weight,
            total_weight,
        }
    }
}

impl Default for CompletenessScorer {
    fn default() -> Self {
        Self::standard()
    }
}
