//! Profile module - The practitioner record as seen by the onboarding core.
//!
//! The core never persists a profile. It reads a [`ProfileSnapshot`] handed in
//! by the caller and returns a new snapshot with proposed changes applied.

mod field;
mod name;
mod snapshot;
mod update;

pub use field::ProfileField;
pub use name::{parse_name, ParsedName};
pub use snapshot::{FieldValue, ProfileSnapshot};
pub use update::{FieldUpdate, ProfileUpdate};
pub(crate) use update::leading_integer;
