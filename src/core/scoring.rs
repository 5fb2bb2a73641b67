use crate::core::affinity::is_related;
use crate::models::{Internship, InternshipType, LocationPreference, ScoreBreakdown, ScoringWeights, UserProfile};

/// Education entry that accepts any user education
pub const EDUCATION_WILDCARD: &str = "Other";

/// Score a profile against one internship
///
/// Scoring formula:
/// score = round(
///     skills * 0.35 +          # Substring overlap with required skills
///     education * 0.25 +       # Binary, "Other" is a wildcard
///     interests * 0.20 +       # Binary, via category affinity
///     location * 0.15 +        # Tiered 30-100
///     difficulty * 0.05        # Stepped by user skill count
/// )
pub fn calculate_match_score(
    profile: &UserProfile,
    internship: &Internship,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let skills = skill_match(&profile.skills, &internship.skills);
    let education = education_match(&profile.education, &internship.required_education);
    let interests = interest_match(&profile.interests, &internship.category);
    let location = location_match(&profile.location, &internship.location, internship.work_type);
    let difficulty = internship.difficulty.steps().score(profile.skills.len());

    let total = skills * weights.skills
        + education * weights.education
        + interests * weights.interests
        + location * weights.location
        + difficulty * weights.difficulty;

    ScoreBreakdown {
        skills,
        education,
        interests,
        location,
        difficulty,
        match_percentage: total.round().clamp(0.0, 100.0) as u8,
    }
}

/// Case-insensitive substring containment in either direction
#[inline]
fn overlaps(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// Skill score (0-100)
///
/// Counts user skills that overlap any required skill, relative to the
/// number of required skills. Capped at 100 since several user skills may
/// overlap the same required skill.
pub fn skill_match(user_skills: &[String], required_skills: &[String]) -> f64 {
    if required_skills.is_empty() {
        return 0.0;
    }

    let required: Vec<String> = required_skills.iter().map(|s| s.to_lowercase()).collect();
    let matching = user_skills
        .iter()
        .map(|s| s.to_lowercase())
        .filter(|skill| {
            required
                .iter()
                .any(|req| req.contains(skill.as_str()) || skill.contains(req.as_str()))
        })
        .count();

    (matching as f64 / required.len() as f64 * 100.0).min(100.0)
}

/// Education score (0 or 100)
pub fn education_match(user_education: &str, required_education: &[String]) -> f64 {
    let matched = required_education
        .iter()
        .any(|req| req == EDUCATION_WILDCARD || overlaps(user_education, req));

    if matched { 100.0 } else { 0.0 }
}

/// Interest score (0 or 100)
pub fn interest_match(user_interests: &[String], category: &str) -> f64 {
    if user_interests.iter().any(|interest| is_related(category, interest)) {
        100.0
    } else {
        0.0
    }
}

/// Location score (30-100)
///
/// Online users: 100 for remote work, 50 otherwise. Offline users: 80 for
/// remote, 90 for hybrid, and for on-site 100 when the city overlaps one of
/// their preferred cities, else 30.
pub fn location_match(
    preference: &LocationPreference,
    internship_location: &str,
    work_type: InternshipType,
) -> f64 {
    if preference.prefers_online() {
        return match work_type {
            InternshipType::Remote => 100.0,
            _ => 50.0,
        };
    }

    match work_type {
        InternshipType::Remote => 80.0,
        InternshipType::Hybrid => 90.0,
        InternshipType::OnSite => {
            if preference
                .cities
                .iter()
                .any(|city| overlaps(internship_location, city))
            {
                100.0
            } else {
                30.0
            }
        }
    }
}
