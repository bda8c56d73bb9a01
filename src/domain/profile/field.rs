//! Profile field identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A named field on the practitioner profile.
///
/// The first twenty variants are scored for completeness; `Title`,
/// `FirstName` and `LastName` are derived from `Name` and carry no weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Specialization,
    Qualification,
    RegistrationNumber,
    ClinicName,
    ClinicAddress,
    ProfilePhoto,
    Bio,
    WorkingHours,
    ConsultationFees,
    ExperienceYears,
    ClinicCity,
    ClinicState,
    DateOfBirth,
    Gender,
    ClinicPincode,
    ClinicPhone,
    Documents,
    Title,
    FirstName,
    LastName,
}

impl ProfileField {
    /// Every field, scored ones first.
    pub const ALL: [ProfileField; 23] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Specialization,
        ProfileField::Qualification,
        ProfileField::RegistrationNumber,
        ProfileField::ClinicName,
        ProfileField::ClinicAddress,
        ProfileField::ProfilePhoto,
        ProfileField::Bio,
        ProfileField::WorkingHours,
        ProfileField::ConsultationFees,
        ProfileField::ExperienceYears,
        ProfileField::ClinicCity,
        ProfileField::ClinicState,
        ProfileField::DateOfBirth,
        ProfileField::Gender,
        ProfileField::ClinicPincode,
        ProfileField::ClinicPhone,
        ProfileField::Documents,
        ProfileField::Title,
        ProfileField::FirstName,
        ProfileField::LastName,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
            ProfileField::Specialization => "specialization",
            ProfileField::Qualification => "qualification",
            ProfileField::RegistrationNumber => "registration_number",
            ProfileField::ClinicName => "clinic_name",
            ProfileField::ClinicAddress => "clinic_address",
            ProfileField::ProfilePhoto => "profile_photo",
            ProfileField::Bio => "bio",
            ProfileField::WorkingHours => "working_hours",
            ProfileField::ConsultationFees => "consultation_fees",
            ProfileField::ExperienceYears => "experience_years",
            ProfileField::ClinicCity => "clinic_city",
            ProfileField::ClinicState => "clinic_state",
            ProfileField::DateOfBirth => "date_of_birth",
            ProfileField::Gender => "gender",
            ProfileField::ClinicPincode => "clinic_pincode",
            ProfileField::ClinicPhone => "clinic_phone",
            ProfileField::Documents => "documents",
            ProfileField::Title => "title",
            ProfileField::FirstName => "first_name",
            ProfileField::LastName => "last_name",
        }
    }

    /// Human-readable label shown to practitioners.
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Full Name",
            ProfileField::Email => "Email Address",
            ProfileField::Phone => "Phone Number",
            ProfileField::Specialization => "Medical Specialization",
            ProfileField::Qualification => "Medical Qualification",
            ProfileField::RegistrationNumber => "Registration Number",
            ProfileField::ClinicName => "Clinic Name",
            ProfileField::ClinicAddress => "Clinic Address",
            ProfileField::ProfilePhoto => "Profile Photo",
            ProfileField::Bio => "Professional Bio",
            ProfileField::WorkingHours => "Working Hours",
            ProfileField::ConsultationFees => "Consultation Fees",
            ProfileField::ExperienceYears => "Years of Experience",
            ProfileField::ClinicCity => "City",
            ProfileField::ClinicState => "State",
            ProfileField::DateOfBirth => "Date of Birth",
            ProfileField::Gender => "Gender",
            ProfileField::ClinicPincode => "Pincode",
            ProfileField::ClinicPhone => "Clinic Phone",
            ProfileField::Documents => "Documents",
            ProfileField::Title => "Professional Title",
            ProfileField::FirstName => "First Name",
            ProfileField::LastName => "Last Name",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProfileField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ValidationError::invalid_format("field", format!("unknown field '{}'", s)))
    }
}
