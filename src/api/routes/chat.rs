//! Chat Routes
//!
//! Simulated support chat sessions.
//!
//! - POST /api/v1/chat/sessions - Open a session
//! - GET /api/v1/chat/sessions/:id - Session transcript
//! - DELETE /api/v1/chat/sessions/:id - End a session
//! - POST /api/v1/chat/sessions/:id/messages - Send a message

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{SendMessageRequest, SendMessageResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::chat::SessionSnapshot;

/// POST /api/v1/chat/sessions
///
/// Open a session. The transcript starts with the greeting.
pub async fn create_session(
    State(state): State<Arc<AppState>>,
) -> ApiResult<(StatusCode, Json<SessionSnapshot>)> {
    let snapshot = state.chat.create_session().await?;
    Ok((StatusCode::CREATED, Json(snapshot)))
}

/// GET /api/v1/chat/sessions/:id
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SessionSnapshot>> {
    Ok(Json(state.chat.session(&id).await?))
}

/// DELETE /api/v1/chat/sessions/:id
///
/// A pending reply for this session is discarded when it fires.
pub async fn end_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.chat.end_session(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/chat/sessions/:id/messages
///
/// Accepts the message and returns immediately; poll the session for the
/// reply.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    request: Result<Json<SendMessageRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SendMessageResponse>)> {
    let Json(request) = request?;
    let message = state.chat.send(&id, &request.text).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(SendMessageResponse {
            message,
            typing: true,
            reply_in_ms: state.chat.config().reply_delay.as_millis() as u64,
        }),
    ))
}
