//! Medical systems a practitioner can be certified in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A system of medicine recognised by the regulating councils.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MedicalSystem {
    Allopathy,
    Homeopathy,
    Ayurveda,
    Unani,
    Siddha,
    /// No system could be inferred.
    Unknown,
}

/// Static reference data about a medical system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemProfile {
    pub name: &'static str,
    pub full_name: &'static str,
    pub description: &'static str,
    pub council: &'static str,
    pub practice_type: &'static str,
    pub common_qualifications: &'static [&'static str],
}

impl MedicalSystem {
    /// Every recognised system, excluding `Unknown`.
    pub fn supported() -> &'static [MedicalSystem] {
        &[
            MedicalSystem::Allopathy,
            MedicalSystem::Homeopathy,
            MedicalSystem::Ayurveda,
            MedicalSystem::Unani,
            MedicalSystem::Siddha,
        ]
    }

    /// Canonical display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MedicalSystem::Allopathy => "Allopathy",
            MedicalSystem::Homeopathy => "Homeopathy",
            MedicalSystem::Ayurveda => "Ayurveda",
            MedicalSystem::Unani => "Unani",
            MedicalSystem::Siddha => "Siddha",
            MedicalSystem::Unknown => "Unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != MedicalSystem::Unknown
    }

    /// Reference data for this system.
    pub fn profile(&self) -> SystemProfile {
        match self {
            MedicalSystem::Allopathy => SystemProfile {
                name: "Allopathy",
                full_name: "Allopathic Medicine",
                description: "Modern Western medicine system",
                council: "Medical Council of India (MCI)",
                practice_type: "allopathy",
                common_qualifications: &["MBBS", "MD", "MS", "DM", "MCH", "DNB"],
            },
            MedicalSystem::Homeopathy => SystemProfile {
                name: "Homeopathy",
                full_name: "Homeopathic Medicine",
                description: "Alternative medicine system based on natural remedies",
                council: "Central Council of Homeopathy (CCH)",
                practice_type: "homeopathy",
                common_qualifications: &["BHMS", "DHMS", "MD Homeopathy"],
            },
            MedicalSystem::Ayurveda => SystemProfile {
                name: "Ayurveda",
                full_name: "Ayurvedic Medicine",
                description: "Traditional Indian medicine system",
                council: "Central Council of Indian Medicine (CCIM)",
                practice_type: "ayurvedic",
                common_qualifications: &["BAMS", "MD Ayurveda", "MS Ayurveda"],
            },
            MedicalSystem::Unani => SystemProfile {
                name: "Unani",
                full_name: "Unani Medicine",
                description: "Traditional Islamic medicine system",
                council: "Central Council of Indian Medicine (CCIM)",
                practice_type: "unani",
                common_qualifications: &["BUMS", "MD Unani", "MS Unani"],
            },
            MedicalSystem::Siddha => SystemProfile {
                name: "Siddha",
                full_name: "Siddha Medicine",
                description: "Traditional Tamil medicine system",
                council: "Central Council of Indian Medicine (CCIM)",
                practice_type: "siddha",
                common_qualifications: &["BSMS", "MD Siddha", "MS Siddha"],
            },
            MedicalSystem::Unknown => SystemProfile {
                name: "Unknown",
                full_name: "Unknown",
                description: "Medical specialization",
                council: "Unknown",
                practice_type: "other",
                common_qualifications: &[],
            },
        }
    }
}

impl Default for MedicalSystem {
    fn default() -> Self {
        MedicalSystem::Unknown
    }
}

impl fmt::Display for MedicalSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MedicalSystem {
    type Err = ValidationError;

    /// Case-insensitive; accepts the "Homoeopathy" spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allopathy" => Ok(MedicalSystem::Allopathy),
            "homeopathy" | "homoeopathy" => Ok(MedicalSystem::Homeopathy),
            "ayurveda" => Ok(MedicalSystem::Ayurveda),
            "unani" => Ok(MedicalSystem::Unani),
            "siddha" => Ok(MedicalSystem::Siddha),
            "unknown" => Ok(MedicalSystem::Unknown),
            other => Err(ValidationError::invalid_format(
                "specialization",
                format!("unrecognised medical system '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_excludes_unknown() {
        assert_eq!(MedicalSystem::supported().len(), 5);
        assert!(!MedicalSystem::supported().contains(&MedicalSystem::Unknown));
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("  AYURVEDA ".parse::<MedicalSystem>().unwrap(), MedicalSystem::Ayurveda);
        assert_eq!("homoeopathy".parse::<MedicalSystem>().unwrap(), MedicalSystem::Homeopathy);
        assert!("naturopathy".parse::<MedicalSystem>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for system in MedicalSystem::supported() {
            assert_eq!(system.to_string().parse::<MedicalSystem>().unwrap(), *system);
        }
    }

    #[test]
    fn indian_systems_share_ccim_council() {
        for system in [MedicalSystem::Ayurveda, MedicalSystem::Unani, MedicalSystem::Siddha] {
            assert_eq!(system.profile().council, "Central Council of Indian Medicine (CCIM)");
        }
        assert_eq!(MedicalSystem::Allopathy.profile().council, "Medical Council of India (MCI)");
    }

    #[test]
    fn unknown_profile_has_no_qualifications() {
        let profile = MedicalSystem::Unknown.profile();
        assert!(profile.common_qualifications.is_empty());
        assert_eq!(profile.practice_type, "other");
    }
}
