use crate::models::{InternshipType, MatchResult};
use serde::{Deserialize, Serialize};

/// Match percentage at which a recommendation counts as strong
pub const STRONG_MATCH_THRESHOLD: u8 = 70;

/// Ordering applied to an already-ranked recommendation list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Highest match percentage first
    #[default]
    Match,
    /// Highest stipend first
    Stipend,
    /// Fewest applicants first
    Applicants,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefineOptions {
    pub work_type: Option<InternshipType>,
    pub sort: SortKey,
}

/// Filter by internship type, then re-sort (stable)
pub fn refine(results: &[MatchResult], options: &RefineOptions) -> Vec<MatchResult> {
    let mut refined: Vec<MatchResult> = results
        .iter()
        .filter(|r| options.work_type.map_or(true, |t| r.internship.work_type == t))
        .cloned()
        .collect();

    match options.sort {
        SortKey::Match => refined.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage)),
        SortKey::Stipend => refined.sort_by(|a, b| {
            let a_stipend = a.internship.stipend_amount().unwrap_or(0);
            let b_stipend = b.internship.stipend_amount().unwrap_or(0);
            b_stipend.cmp(&a_stipend)
        }),
        SortKey::Applicants => refined.sort_by_key(|r| r.internship.applicants),
    }

    refined
}

/// Headline numbers for a recommendation list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSummary {
    pub total: usize,
    pub best_match: u8,
    pub strong_matches: usize,
    pub average_match: u8,
}

impl RecommendationSummary {
    pub fn from_results(results: &[MatchResult]) -> Self {
        if results.is_empty() {
            return Self::default();
        }

        let sum: u32 = results.iter().map(|r| r.match_percentage as u32).sum();
        let average = (sum as f64 / results.len() as f64).round() as u8;

        Self {
            total: results.len(),
            best_match: results.iter().map(|r| r.match_percentage).max().unwrap_or(0),
            strong_matches: results
                .iter()
                .filter(|r| r.match_percentage >= STRONG_MATCH_THRESHOLD)
                .count(),
            average_match: average,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn result(id: &str, percentage: u8) -> MatchResult {
        MatchResult {
            internship: Catalog::reference().get(id).unwrap().clone(),
            match_percentage: percentage,
            match_reasons: vec!["Basic compatibility match".to_string()],
        }
    }

    fn ids(results: &[MatchResult]) -> Vec<&str> {
        results.iter().map(|r| r.internship.id.as_str()).collect()
    }

    #[test]
    fn test_filter_by_type() {
        // 2 and 8 are remote, 3 is hybrid, 1 is on-site
        let results = vec![result("1", 75), result("2", 60), result("3", 50), result("8", 45)];

        let options = RefineOptions {
            work_type: Some(InternshipType::Remote),
            sort: SortKey::Match,
        };
        assert_eq!(ids(&refine(&results, &options)), vec!["2", "8"]);
        assert_eq!(refine(&results, &RefineOptions::default()).len(), 4);
    }

    #[test]
    fn test_sort_by_stipend_and_applicants() {
        // stipends: 1 -> 15000, 2 -> 18000, 8 -> 8000
        // applicants: 1 -> 156, 2 -> 89, 8 -> 289
        let results = vec![result("1", 75), result("2", 60), result("8", 45)];

        let by_stipend = RefineOptions { work_type: None, sort: SortKey::Stipend };
        assert_eq!(ids(&refine(&results, &by_stipend)), vec!["2", "1", "8"]);

        let by_applicants = RefineOptions { work_type: None, sort: SortKey::Applicants };
        assert_eq!(ids(&refine(&results, &by_applicants)), vec!["2", "1", "8"]);
    }

    #[test]
    fn test_summary() {
        let results = vec![result("1", 75), result("4", 73), result("8", 45)];
        let summary = RecommendationSummary::from_results(&results);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.best_match, 75);
        assert_eq!(summary.strong_matches, 2);
        assert_eq!(summary.average_match, 64);

        assert_eq!(RecommendationSummary::from_results(&[]), RecommendationSummary::default());
    }
}
