use actix_web::{web, HttpResponse};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::catalog::Catalog;
use crate::core::{refine, Matcher};
use crate::models::{
    CatalogResponse, HealthResponse, MatchResult, RecommendResponse, RecommendationsQuery,
    SessionResponse, UserProfile,
};
use crate::routes::ApiError;
use crate::services::{KeyValueStore, ProfileStorage};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub matcher: Matcher,
    pub store: Arc<dyn KeyValueStore>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, matcher: Matcher, store: Arc<dyn KeyValueStore>) -> Self {
        Self { catalog, matcher, store }
    }

    fn storage(&self, session_id: Uuid) -> ProfileStorage {
        ProfileStorage::new(self.store.clone(), session_id.to_string())
    }

    fn recommend(&self, profile: &UserProfile) -> Vec<MatchResult> {
        self.matcher.match_internships(profile, &self.catalog)
    }
}

/// Configure all recommendation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/internships", web::get().to(list_internships))
        .route("/internships/{id}", web::get().to(get_internship))
        .route("/recommend", web::post().to(recommend))
        .route("/sessions", web::post().to(create_session))
        .route("/sessions/{id}", web::delete().to(clear_session))
        .service(
            web::resource("/sessions/{id}/profile")
                .route(web::put().to(save_profile))
                .route(web::get().to(get_profile)),
        )
        .route("/sessions/{id}/recommendations", web::get().to(get_recommendations));
}

fn validate_profile(profile: &UserProfile) -> Result<(), ApiError> {
    profile.validate().map_err(|errors| {
        tracing::info!("Profile validation failed: field_errors={:?}", errors);
        ApiError::Validation(errors.to_string())
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        catalog_size: state.catalog.len(),
    })
}

/// GET /api/v1/internships
async fn list_internships(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(CatalogResponse {
        internships: state.catalog.entries().to_vec(),
        total: state.catalog.len(),
    })
}

/// GET /api/v1/internships/{id}
async fn get_internship(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    state
        .catalog
        .get(&id)
        .map(|internship| HttpResponse::Ok().json(internship))
        .ok_or_else(|| ApiError::NotFound(format!("Internship {} not found", id)))
}

/// Recommend endpoint
///
/// POST /api/v1/recommend
///
/// Request body:
/// ```json
/// {
///   "education": "B.Tech - Computer Science",
///   "interests": ["web-dev"],
///   "skills": ["JavaScript", "React"],
///   "location": { "type": "online", "cities": [] }
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<UserProfile>,
) -> Result<HttpResponse, ApiError> {
    let profile = req.into_inner();
    validate_profile(&profile)?;

    let recommendations = state.recommend(&profile);

    tracing::info!(
        "Returning {} recommendations (education: {:?}, {} skills)",
        recommendations.len(),
        profile.education,
        profile.skills.len()
    );

    Ok(HttpResponse::Ok().json(RecommendResponse::new(recommendations)))
}

/// POST /api/v1/sessions
async fn create_session() -> HttpResponse {
    let session_id = Uuid::new_v4().to_string();
    tracing::debug!("Opened session {}", session_id);
    HttpResponse::Created().json(SessionResponse { session_id })
}

/// Store a profile and its fresh recommendations
///
/// PUT /api/v1/sessions/{id}/profile
async fn save_profile(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<UserProfile>,
) -> Result<HttpResponse, ApiError> {
    let profile = req.into_inner();
    validate_profile(&profile)?;

    let storage = state.storage(path.into_inner());
    let recommendations = state.recommend(&profile);

    storage.set_profile(&profile).await;
    storage.set_recommendations(&recommendations).await;

    tracing::info!(
        "Stored profile and {} recommendations for session {}",
        recommendations.len(),
        storage.scope()
    );

    Ok(HttpResponse::Ok().json(RecommendResponse::new(recommendations)))
}

/// GET /api/v1/sessions/{id}/profile
async fn get_profile(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let storage = state.storage(path.into_inner());
    storage
        .get_profile()
        .await
        .map(|profile| HttpResponse::Ok().json(profile))
        .ok_or_else(|| ApiError::NotFound(format!("No profile stored for session {}", storage.scope())))
}

/// Stored recommendations, optionally filtered and re-sorted
///
/// GET /api/v1/sessions/{id}/recommendations?type={type}&sort={match|stipend|applicants}
///
/// When only the profile survives, recommendations are recomputed and stored
/// again.
async fn get_recommendations(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<RecommendationsQuery>,
) -> Result<HttpResponse, ApiError> {
    let options = query.into_inner().into_options().map_err(ApiError::InvalidQuery)?;
    let storage = state.storage(path.into_inner());

    let recommendations = match storage.get_recommendations().await {
        Some(stored) => stored,
        None => {
            let profile = storage.get_profile().await.ok_or_else(|| {
                ApiError::NotFound(format!("No profile stored for session {}", storage.scope()))
            })?;

            tracing::debug!("Recomputing recommendations for session {}", storage.scope());
            let fresh = state.recommend(&profile);
            storage.set_recommendations(&fresh).await;
            fresh
        }
    };

    let refined = refine(&recommendations, &options);
    Ok(HttpResponse::Ok().json(RecommendResponse::new(refined)))
}

/// DELETE /api/v1/sessions/{id}
async fn clear_session(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    let storage = state.storage(path.into_inner());
    storage.clear().await;
    tracing::debug!("Cleared session {}", storage.scope());
    HttpResponse::NoContent().finish()
}
