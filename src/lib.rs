//! Practice Onboarding - conversational onboarding for medical practitioners.
//!
//! This crate detects a practitioner's medical system from their
//! qualifications, scores profile completeness, and drives a four-step
//! onboarding conversation backed by a language model.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
