// Core algorithm exports
pub mod affinity;
pub mod explain;
pub mod matcher;
pub mod refine;
pub mod scoring;

pub use affinity::{is_related, related_categories, CATEGORY_AFFINITY};
pub use explain::match_reasons;
pub use matcher::{match_internships, Matcher};
pub use refine::{refine, RecommendationSummary, RefineOptions, SortKey};
pub use scoring::{calculate_match_score, education_match, interest_match, location_match, skill_match};
