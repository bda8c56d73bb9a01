//! Domain layer containing onboarding business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, percentages, errors, state machines)
//! - `specialization` - Medical system detection from qualification text
//! - `profile` - Practitioner profile snapshots and field updates
//! - `completeness` - Weighted completeness scoring and remediation actions
//! - `onboarding` - The four-step workflow and dialogue turn building blocks

pub mod completeness;
pub mod foundation;
pub mod onboarding;
pub mod profile;
pub mod specialization;
