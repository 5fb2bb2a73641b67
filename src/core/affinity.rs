use crate::models::Difficulty;

/// Category -> related interest tags (each list includes the category itself)
///
/// Categories missing from this table relate only to themselves.
pub const CATEGORY_AFFINITY: &[(&str, &[&str])] = &[
    ("web-dev", &["web-dev", "ui-ux", "mobile-dev"]),
    ("data-science", &["data-science", "ai-ml"]),
    ("digital-marketing", &["digital-marketing", "content-writing"]),
    ("mobile-dev", &["mobile-dev", "web-dev", "ui-ux"]),
    ("ai-ml", &["ai-ml", "data-science"]),
    ("cybersecurity", &["cybersecurity"]),
    ("business-analysis", &["business-analysis", "project-mgmt"]),
    ("content-writing", &["content-writing", "digital-marketing"]),
];

/// Skill-count thresholds for one difficulty level
///
/// `steps` is ordered by descending minimum skill count; the first step the
/// user clears wins, otherwise `floor` applies.
#[derive(Debug, Clone, Copy)]
pub struct DifficultySteps {
    pub steps: &'static [(usize, f64)],
    pub floor: f64,
}

pub const BEGINNER_STEPS: DifficultySteps = DifficultySteps {
    steps: &[(2, 100.0), (1, 80.0)],
    floor: 60.0,
};

pub const INTERMEDIATE_STEPS: DifficultySteps = DifficultySteps {
    steps: &[(4, 100.0), (3, 80.0), (2, 60.0)],
    floor: 40.0,
};

pub const ADVANCED_STEPS: DifficultySteps = DifficultySteps {
    steps: &[(6, 100.0), (5, 80.0), (4, 60.0)],
    floor: 30.0,
};

impl Difficulty {
    pub fn steps(self) -> &'static DifficultySteps {
        match self {
            Difficulty::Beginner => &BEGINNER_STEPS,
            Difficulty::Intermediate => &INTERMEDIATE_STEPS,
            Difficulty::Advanced => &ADVANCED_STEPS,
        }
    }
}

impl DifficultySteps {
    #[inline]
    pub fn score(&self, skill_count: usize) -> f64 {
        self.steps
            .iter()
            .find(|(min_skills, _)| skill_count >= *min_skills)
            .map(|(_, score)| *score)
            .unwrap_or(self.floor)
    }
}

/// Related tags for a category, if the category is in the affinity table
pub fn related_categories(category: &str) -> Option<&'static [&'static str]> {
    CATEGORY_AFFINITY
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, related)| *related)
}

/// Whether an interest tag counts towards an internship category
#[inline]
pub fn is_related(category: &str, interest: &str) -> bool {
    match related_categories(category) {
        Some(related) => related.contains(&interest),
        None => category == interest,
    }
}
