//! VR Relaxation Routes
//!
//! - GET /api/v1/vr/environments - All environments
//! - GET /api/v1/vr/environments/:id - One environment
//! - GET /api/v1/vr/sessions - Guided sessions

use axum::{extract::Path, Json};

use crate::api::error::{ApiError, ApiResult};
use crate::screens::vr::{environments, find_environment, guided_sessions, Environment, GuidedSession};

/// GET /api/v1/vr/environments
pub async fn list_environments() -> Json<Vec<Environment>> {
    Json(environments())
}

/// GET /api/v1/vr/environments/:id
pub async fn get_environment(Path(id): Path<String>) -> ApiResult<Json<Environment>> {
    let all = environments();
    let env = find_environment(&all, &id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("Environment '{}' not found", id)))?;
    Ok(Json(env))
}

/// GET /api/v1/vr/sessions
pub async fn list_guided_sessions() -> Json<Vec<GuidedSession>> {
    Json(guided_sessions())
}
