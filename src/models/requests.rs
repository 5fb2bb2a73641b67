use crate::core::refine::{RefineOptions, SortKey};
use crate::models::domain::InternshipType;
use serde::{Deserialize, Serialize};

/// Query string accepted when listing stored recommendations
///
/// `GET /api/v1/sessions/{id}/recommendations?type=Remote&sort=stipend`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationsQuery {
    #[serde(rename = "type")]
    pub work_type: Option<String>,
    #[serde(default)]
    pub sort: Option<SortKey>,
}

impl RecommendationsQuery {
    /// Convert to refine options; "all" or an absent type means no filter
    pub fn into_options(self) -> Result<RefineOptions, String> {
        let work_type = match self.work_type.as_deref() {
            None | Some("") | Some("all") => None,
            Some(raw) => Some(raw.parse::<InternshipType>()?),
        };

        Ok(RefineOptions {
            work_type,
            sort: self.sort.unwrap_or_default(),
        })
    }
}
