use crate::catalog::Catalog;
use crate::core::{explain::match_reasons, scoring::calculate_match_score};
use crate::models::{Internship, MatchResult, MatchingLimits, ScoreBreakdown, ScoringWeights, UserProfile};

/// Ranks catalog entries against a user profile
///
/// # Pipeline Stages
/// 1. Component scoring and weighted composite, per entry
/// 2. Reason generation
/// 3. Cut-off filter (strictly above the minimum percentage)
/// 4. Stable descending sort and truncation
///
/// Stateless: the same profile and catalog always yield the same output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matcher {
    weights: ScoringWeights,
    limits: MatchingLimits,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, limits: MatchingLimits) -> Self {
        Self { weights, limits }
    }

    pub fn with_defaults() -> Self {
        Self::new(ScoringWeights::default(), MatchingLimits::default())
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn limits(&self) -> &MatchingLimits {
        &self.limits
    }

    /// Component scores for a single internship
    pub fn score(&self, profile: &UserProfile, internship: &Internship) -> ScoreBreakdown {
        calculate_match_score(profile, internship, &self.weights)
    }

    /// Rank every catalog entry for a profile
    ///
    /// # Returns
    /// At most `max_results` results, each above `min_match_percentage`,
    /// sorted by percentage descending with ties kept in catalog order.
    pub fn match_internships(&self, profile: &UserProfile, catalog: &Catalog) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = catalog
            .iter()
            .filter_map(|internship| {
                let breakdown = self.score(profile, internship);

                if breakdown.match_percentage <= self.limits.min_match_percentage {
                    tracing::trace!(
                        "Dropping internship {} at {}%",
                        internship.id,
                        breakdown.match_percentage
                    );
                    return None;
                }

                Some(MatchResult {
                    internship: internship.clone(),
                    match_percentage: breakdown.match_percentage,
                    match_reasons: match_reasons(&breakdown, internship, profile),
                })
            })
            .collect();

        // sort_by is stable, so equal percentages keep catalog order
        results.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
        results.truncate(self.limits.max_results);

        tracing::debug!(
            "Ranked {} of {} internships (education: {:?}, {} skills, {} interests)",
            results.len(),
            catalog.len(),
            profile.education,
            profile.skills.len(),
            profile.interests.len()
        );

        results
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Rank the reference catalog with the default weights and limits
pub fn match_internships(profile: &UserProfile) -> Vec<MatchResult> {
    Matcher::with_defaults().match_internships(profile, Catalog::reference())
}
