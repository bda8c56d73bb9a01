//! Qualification reference data per medical system.

use serde::Serialize;

use super::{MedicalSystem, NO_MATCH_CONFIDENCE, RULE_MATCH_CONFIDENCE};

/// Typical qualifications for a system, grouped by level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QualificationSuggestions {
    pub primary: Vec<&'static str>,
    pub secondary: Vec<&'static str>,
    pub diploma: Vec<&'static str>,
}

impl QualificationSuggestions {
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty() && self.diploma.is_empty()
    }
}

/// Result of checking a qualification against a claimed system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualificationCheck {
    pub is_valid: bool,
    pub matched_qualification: Option<&'static str>,
    pub suggested_qualifications: Vec<&'static str>,
    pub confidence: f64,
}

pub fn suggest_qualifications(system: MedicalSystem) -> QualificationSuggestions {
    match system {
        MedicalSystem::Allopathy => grouped(
            &["MBBS", "MD", "MS"],
            &["DM", "MCH", "DNB", "MRCP", "FRCS"],
            &["DCH", "DGO", "DORTHO", "DPSYCH", "DPM"],
        ),
        MedicalSystem::Homeopathy => grouped(
            &["BHMS", "DHMS"],
            &["MD Homeopathy", "CCH"],
            &["Diploma in Homeopathy"],
        ),
        MedicalSystem::Ayurveda => grouped(
            &["BAMS"],
            &["MD Ayurveda", "MS Ayurveda"],
            &["Diploma in Ayurveda"],
        ),
        MedicalSystem::Unani => grouped(&["BUMS"], &["MD Unani", "MS Unani"], &["Diploma in Unani"]),
        MedicalSystem::Siddha => grouped(&["BSMS"], &["MD Siddha", "MS Siddha"], &["Diploma in Siddha"]),
        MedicalSystem::Unknown => QualificationSuggestions::default(),
    }
}

fn grouped(
    primary: &[&'static str],
    secondary: &[&'static str],
    diploma: &[&'static str],
) -> QualificationSuggestions {
    QualificationSuggestions {
        primary: primary.to_vec(),
        secondary: secondary.to_vec(),
        diploma: diploma.to_vec(),
    }
}

/// Checks whether `qualification` contains one of the system's common degrees.
pub fn validate_qualification(qualification: &str, system: MedicalSystem) -> QualificationCheck {
    let common = system.profile().common_qualifications;
    let normalized = qualification.trim().to_uppercase();
    let matched = if normalized.is_empty() {
        None
    } else {
        common
            .iter()
            .copied()
            .find(|candidate| normalized.contains(&candidate.to_uppercase()))
    };

    QualificationCheck {
        is_valid: matched.is_some(),
        matched_qualification: matched,
        suggested_qualifications: common.to_vec(),
        confidence: if matched.is_some() {
            RULE_MATCH_CONFIDENCE
        } else {
            NO_MATCH_CONFIDENCE
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_system_has_suggestions() {
        for system in MedicalSystem::supported() {
            assert!(!suggest_qualifications(*system).primary.is_empty(), "{system}");
        }
        assert!(suggest_qualifications(MedicalSystem::Unknown).is_empty());
    }

    #[test]
    fn matching_degree_validates() {
        let check = validate_qualification("bhms, 2012", MedicalSystem::Homeopathy);
        assert!(check.is_valid);
        assert_eq!(check.matched_qualification, Some("BHMS"));
        assert_eq!(check.confidence, RULE_MATCH_CONFIDENCE);
    }

    #[test]
    fn mismatched_degree_lists_alternatives() {
        let check = validate_qualification("BAMS", MedicalSystem::Siddha);
        assert!(!check.is_valid);
        assert_eq!(check.matched_qualification, None);
        assert_eq!(check.suggested_qualifications, vec!["BSMS", "MD Siddha", "MS Siddha"]);
        assert_eq!(check.confidence, NO_MATCH_CONFIDENCE);
    }

    #[test]
    fn blank_qualification_never_validates() {
        assert!(!validate_qualification("  ", MedicalSystem::Allopathy).is_valid);
    }
}
