// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Difficulty, Internship, InternshipType, LocationPreference, MatchResult, MatchingLimits,
    ScoreBreakdown, ScoringWeights, UserProfile, WorkMode,
};
pub use requests::RecommendationsQuery;
pub use responses::{CatalogResponse, ErrorResponse, HealthResponse, RecommendResponse, SessionResponse};
