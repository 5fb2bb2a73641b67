use crate::models::{Internship, ScoreBreakdown, UserProfile};

pub const PERFECT_EDUCATION_REASON: &str = "Perfect education fit";
pub const INTEREST_REASON: &str = "Matches your interests";
pub const LOCATION_REASON: &str = "Great location match";
pub const REMOTE_PREFERENCE_REASON: &str = "Remote work preference";
pub const FALLBACK_REASON: &str = "Basic compatibility match";

/// Build the human-readable reasons for a score, in fixed check order
///
/// Never returns an empty list: when no rule fires the fallback reason is
/// used on its own.
pub fn match_reasons(
    breakdown: &ScoreBreakdown,
    internship: &Internship,
    profile: &UserProfile,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if breakdown.skills > 50.0 {
        reasons.push(format!("{}% skill match", breakdown.skills.round() as u32));
    }
    if breakdown.education == 100.0 {
        reasons.push(PERFECT_EDUCATION_REASON.to_string());
    }
    if breakdown.interests == 100.0 {
        reasons.push(INTEREST_REASON.to_string());
    }
    if breakdown.location >= 80.0 {
        reasons.push(LOCATION_REASON.to_string());
    }
    if internship.is_remote() && profile.location.prefers_online() {
        reasons.push(REMOTE_PREFERENCE_REASON.to_string());
    }

    if reasons.is_empty() {
        reasons.push(FALLBACK_REASON.to_string());
    }

    reasons
}
