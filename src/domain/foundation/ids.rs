//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a practitioner record.
///
/// The record itself lives in the persistence layer; the core only carries
/// the id through prompts metadata and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PractitionerId(Uuid);

impl PractitionerId {
    /// Creates a new random PractitionerId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a PractitionerId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PractitionerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PractitionerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PractitionerId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn practitioner_id_generates_unique_values() {
        assert_ne!(PractitionerId::new(), PractitionerId::new());
    }

    #[test]
    fn practitioner_id_round_trips_through_string() {
        let id = PractitionerId::new();
        let parsed: PractitionerId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn practitioner_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<PractitionerId>().is_err());
    }

    #[test]
    fn practitioner_id_serializes_as_plain_uuid() {
        let uuid = Uuid::new_v4();
        let id = PractitionerId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
        assert_eq!(id.as_uuid(), &uuid);
    }
}
