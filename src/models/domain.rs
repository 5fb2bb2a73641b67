use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use validator::{Validate, ValidationError};

/// Self-reported profile of a prospective intern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_location"))]
pub struct UserProfile {
    #[validate(length(min = 1))]
    pub education: String,
    #[validate(length(min = 1), custom(function = "validate_tags"))]
    pub interests: Vec<String>,
    #[validate(length(min = 1, max = 10), custom(function = "validate_tags"))]
    pub skills: Vec<String>,
    pub location: LocationPreference,
}

/// Where the user is willing to work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPreference {
    #[serde(rename = "type")]
    pub mode: WorkMode,
    #[serde(default)]
    pub cities: Vec<String>,
}

impl LocationPreference {
    pub fn online() -> Self {
        Self {
            mode: WorkMode::Online,
            cities: vec![],
        }
    }

    pub fn offline<I, S>(cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode: WorkMode::Offline,
            cities: cities.into_iter().map(Into::into).collect(),
        }
    }

    pub fn prefers_online(&self) -> bool {
        self.mode == WorkMode::Online
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    Online,
    Offline,
}

/// Tags must be non-blank and unique (case-sensitive)
fn validate_tags(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(ValidationError::new("blank_entry"));
    }

    let mut seen = HashSet::with_capacity(values.len());
    if values.iter().any(|v| !seen.insert(v.as_str())) {
        return Err(ValidationError::new("duplicate_entry"));
    }

    Ok(())
}

/// Cities are required for offline work and forbidden for online work
fn validate_location(profile: &UserProfile) -> Result<(), ValidationError> {
    let location = &profile.location;
    match location.mode {
        WorkMode::Online if !location.cities.is_empty() => {
            Err(ValidationError::new("cities_with_online_preference"))
        }
        WorkMode::Offline if location.cities.is_empty() => {
            Err(ValidationError::new("offline_preference_without_cities"))
        }
        WorkMode::Offline => validate_tags(&location.cities),
        WorkMode::Online => Ok(()),
    }
}

/// Catalog entry describing one internship listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Internship {
    pub id: String,
    pub title: String,
    pub company: String,
    /// A single city name or "Remote"
    pub location: String,
    #[serde(rename = "type")]
    pub work_type: InternshipType,
    pub duration: String,
    /// Formatted as "₹N/month"
    pub stipend: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub skills: Vec<String>,
    pub application_deadline: NaiveDate,
    pub start_date: NaiveDate,
    pub applicants: u32,
    /// May contain the "Other" wildcard
    pub required_education: Vec<String>,
    pub category: String,
    pub difficulty: Difficulty,
}

impl Internship {
    /// Monthly stipend in rupees, e.g. "₹15,000/month" -> 15000
    pub fn stipend_amount(&self) -> Option<u32> {
        let digits: String = self.stipend.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }

    pub fn is_remote(&self) -> bool {
        self.work_type == InternshipType::Remote
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InternshipType {
    Remote,
    #[serde(rename = "On-site", alias = "on-site", alias = "onsite")]
    OnSite,
    Hybrid,
}

impl std::str::FromStr for InternshipType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "on-site" | "onsite" => Ok(Self::OnSite),
            "hybrid" => Ok(Self::Hybrid),
            other => Err(format!("unknown internship type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Ranked recommendation for a single internship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub internship: Arc<Internship>,
    pub match_percentage: u8,
    pub match_reasons: Vec<String>,
}

/// Per-component scores (each 0-100) and their weighted composite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub education: f64,
    pub interests: f64,
    pub location: f64,
    pub difficulty: f64,
    pub match_percentage: u8,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skills: f64,
    pub education: f64,
    pub interests: f64,
    pub location: f64,
    pub difficulty: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.education + self.interests + self.location + self.difficulty
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.35,
            education: 0.25,
            interests: 0.20,
            location: 0.15,
            difficulty: 0.05,
        }
    }
}

/// Cut-off and size bound applied after scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingLimits {
    /// Results at or below this percentage are dropped
    pub min_match_percentage: u8,
    pub max_results: usize,
}

impl Default for MatchingLimits {
    fn default() -> Self {
        Self {
            min_match_percentage: 20,
            max_results: 8,
        }
    }
}
