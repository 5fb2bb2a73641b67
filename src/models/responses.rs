use serde::{Deserialize, Serialize};
use crate::core::refine::RecommendationSummary;
use crate::models::domain::{Internship, MatchResult};
use std::sync::Arc;

/// Response for the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<MatchResult>,
    pub summary: RecommendationSummary,
}

impl RecommendResponse {
    pub fn new(recommendations: Vec<MatchResult>) -> Self {
        let summary = RecommendationSummary::from_results(&recommendations);
        Self {
            recommendations,
            summary,
        }
    }
}

/// Catalog listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub internships: Vec<Arc<Internship>>,
    pub total: usize,
}

/// Newly opened storage session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "catalogSize")]
    pub catalog_size: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
