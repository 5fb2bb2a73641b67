//! Internship Match - deterministic internship recommendation engine
//!
//! Ranks a fixed catalog of internships against a self-reported profile
//! (education, skills, interests, location preference) using a weighted rule
//! system, and returns a bounded, explained result set.

pub mod catalog;
pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError};
pub use crate::core::{match_internships, Matcher};
pub use models::{Internship, LocationPreference, MatchResult, ScoringWeights, UserProfile};
