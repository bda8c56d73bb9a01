//! Ordered qualification pattern table.
//!
//! Group order is the tie-break: a string matching several systems is
//! claimed by the first group that hits. Allopathy goes last because its
//! short tokens ("MD", "MS") occur inside other systems' degrees.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Arc;

use super::MedicalSystem;
use crate::domain::foundation::ValidationError;

/// Patterns for one medical system, in specificity order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternGroup {
    pub system: MedicalSystem,
    /// Evaluated in the strict pass.
    pub strict: Vec<String>,
    /// Evaluated only when no group matched strictly.
    pub loose: Vec<String>,
}

impl PatternGroup {
    pub fn new<S: AsRef<str>>(system: MedicalSystem, strict: &[S], loose: &[S]) -> Self {
        Self {
            system,
            strict: strict.iter().map(|p| p.as_ref().trim().to_uppercase()).collect(),
            loose: loose.iter().map(|p| p.as_ref().trim().to_uppercase()).collect(),
        }
    }

    /// First strict pattern contained in `normalized`.
    pub fn strict_match(&self, normalized: &str) -> Option<&str> {
        self.strict
            .iter()
            .find(|p| normalized.contains(p.as_str()))
            .map(String::as_str)
    }

    /// First loose pattern contained in `normalized`.
    pub fn loose_match(&self, normalized: &str) -> Option<&str> {
        self.loose
            .iter()
            .find(|p| normalized.contains(p.as_str()))
            .map(String::as_str)
    }
}

/// Immutable, validated list of pattern groups in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTable {
    groups: Vec<PatternGroup>,
}

static STANDARD: Lazy<Arc<PatternTable>> = Lazy::new(|| Arc::new(PatternTable::build_standard()));

impl PatternTable {
    /// Validates and builds a table.
    ///
    /// Rejects `Unknown` groups, repeated systems, and empty patterns.
    pub fn new(groups: Vec<PatternGroup>) -> Result<Self, ValidationError> {
        if groups.is_empty() {
            return Err(ValidationError::empty_field("pattern_groups"));
        }
        let mut seen = HashSet::new();
        for group in &groups {
            if !group.system.is_known() {
                return Err(ValidationError::invalid_format(
                    "pattern_groups",
                    "Unknown cannot own patterns",
                ));
            }
            if !seen.insert(group.system) {
                return Err(ValidationError::duplicate(group.system.as_str()));
            }
            if group.strict.is_empty() {
                return Err(ValidationError::empty_field(format!(
                    "{}.strict",
                    group.system
                )));
            }
            if group.strict.iter().chain(&group.loose).any(|p| p.is_empty()) {
                return Err(ValidationError::invalid_format(
                    group.system.as_str(),
                    "patterns must not be blank",
                ));
            }
        }
        Ok(Self { groups })
    }

    /// The production table, built once per process.
    pub fn standard() -> Arc<PatternTable> {
        Arc::clone(&STANDARD)
    }

    pub fn groups(&self) -> &[PatternGroup] {
        &self.groups
    }

    fn build_standard() -> Self {
        Self {
            groups: vec![
                PatternGroup::new(
                    MedicalSystem::Ayurveda,
                    &[
                        "BAMS",
                        "MD AYURVEDA",
                        "MS AYURVEDA",
                        "MD AYUR",
                        "MS AYUR",
                        "DIPLOMA IN AYURVEDA",
                        "AYURVEDA",
                        "AYURVEDIC",
                    ],
                    &["BAMS", "AYUR"],
                ),
                PatternGroup::new(
                    MedicalSystem::Homeopathy,
                    &[
                        "BHMS",
                        "DHMS",
                        "MD HOM",
                        "MD HOMEOPATHY",
                        "DIPLOMA IN HOMEOPATHY",
                        "CCH",
                        "PGDH",
                        "HOMOEOPATHY",
                        "HOMEOPATHY",
                    ],
                    &["BHMS", "HOM"],
                ),
                PatternGroup::new(
                    MedicalSystem::Unani,
                    &["BUMS", "MD UNANI", "MS UNANI", "DIPLOMA IN UNANI", "UNANI"],
                    &["BUMS", "UNANI"],
                ),
                PatternGroup::new(
                    MedicalSystem::Siddha,
                    &["BSMS", "MD SIDDHA", "MS SIDDHA", "DIPLOMA IN SIDDHA", "SIDDHA"],
                    &["BSMS", "SIDDHA"],
                ),
                PatternGroup::new(
                    MedicalSystem::Allopathy,
                    &[
                        "MBBS",
                        "MD",
                        "MS",
                        "DM",
                        "MCH",
                        "DNB",
                        "MRCP",
                        "FRCS",
                        "MRCS",
                        "DIPLOMA",
                        "DCH",
                        "DGO",
                        "DORTHO",
                        "DPSYCH",
                        "DPM",
                        "DLO",
                        "DMRD",
                        "DMRT",
                        "DIPLOMA IN",
                        "BDS",
                        "MDS",
                        "BPT",
                        "MPT",
                        "BSC NURSING",
                        "MSC NURSING",
                        "B.PHARM",
                        "M.PHARM",
                        "PHARM D",
                    ],
                    &["MBBS", "MD", "MS"],
                ),
            ],
        }
    }
}
