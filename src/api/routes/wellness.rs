//! Wellness Routes
//!
//! - POST /api/v1/wellness/checkins - Validate a mood check-in

use axum::{extract::rejection::JsonRejection, Json};

use crate::api::dto::{CheckInRequest, CheckInResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::screens::wellness::{check_in, MoodTone};

/// POST /api/v1/wellness/checkins
///
/// Echoes the mood entry back. Check-ins are not recorded.
pub async fn create_checkin(
    request: Result<Json<CheckInRequest>, JsonRejection>,
) -> ApiResult<Json<CheckInResponse>> {
    let Json(request) = request?;
    let value = u8::try_from(request.value).map_err(|_| {
        ApiError::Validation(format!(
            "Mood value must be between 1 and 5, got {}",
            request.value
        ))
    })?;
    let entry = check_in(value).map_err(|e| ApiError::Validation(e.to_string()))?;

    tracing::debug!(mood = entry.value.get(), "Mood check-in");

    Ok(Json(CheckInResponse {
        tone: MoodTone::for_mood(entry.value.get()),
        entry,
    }))
}
