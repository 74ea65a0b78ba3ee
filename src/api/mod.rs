//! MindBridge REST API
//!
//! HTTP layer for MindBridge, built with Axum.
//!
//! # Endpoints
//!
//! ## Chat
//! - `POST /api/v1/chat/sessions` - Open a chat session
//! - `GET /api/v1/chat/sessions/:id` - Session transcript
//! - `DELETE /api/v1/chat/sessions/:id` - End a session
//! - `POST /api/v1/chat/sessions/:id/messages` - Send a message
//!
//! ## Catalogs
//! - `GET /api/v1/resources` - Search resources
//! - `GET /api/v1/forum/posts` - Search forum posts
//!
//! ## Counseling
//! - `GET /api/v1/counseling/calendar` - Selectable dates
//! - `GET /api/v1/counseling/counselors` - Counselors
//! - `POST /api/v1/counseling/booking/check` - Validate selections
//! - `POST /api/v1/counseling/bookings` - Submit a booking
//!
//! ## Screens
//! - `POST /api/v1/wellness/checkins` - Mood check-in
//! - `GET /api/v1/vr/environments[/:id]` - VR environments
//! - `GET /api/v1/vr/sessions` - Guided sessions
//! - `GET /api/v1/admin/analytics` - Admin analytics tab
//! - `GET /api/v1/routes` - Route table
//! - `GET /*` - Screen view documents
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use mindbridge::api::{serve, ApiConfig, AppState};
//! use mindbridge::chat::ChatServiceConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!     let state = AppState::with_chat_config(ChatServiceConfig::default(), config.clone());
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Chat routes
        .route("/chat/sessions", post(routes::chat::create_session))
        .route(
            "/chat/sessions/:id",
            get(routes::chat::get_session).delete(routes::chat::end_session),
        )
        .route("/chat/sessions/:id/messages", post(routes::chat::send_message))
        // Catalog routes
        .route("/resources", get(routes::resources::list_resources))
        .route("/forum/posts", get(routes::forum::list_posts))
        // Counseling routes
        .route("/counseling/calendar", get(routes::counseling::calendar))
        .route("/counseling/counselors", get(routes::counseling::list_counselors))
        .route("/counseling/booking/check", post(routes::counseling::check_booking))
        .route("/counseling/bookings", post(routes::counseling::submit_booking))
        // Screen routes
        .route("/wellness/checkins", post(routes::wellness::create_checkin))
        .route("/vr/environments", get(routes::vr::list_environments))
        .route("/vr/environments/:id", get(routes::vr::get_environment))
        .route("/vr/sessions", get(routes::vr::list_guided_sessions))
        .route("/admin/analytics", get(routes::admin::analytics))
        .route("/routes", get(routes::screens::list_routes));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config.cors_origins);
    let timeout = TimeoutLayer::new(state.config.request_timeout);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback(routes::screens::view_fallback)
        .layer(timeout)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::permissive().allow_origin(AllowOrigin::list(allowed))
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("MindBridge listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("MindBridge shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{is_canned_reply, ChatServiceConfig};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use std::time::Duration;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::with_chat_config(ChatServiceConfig::default(), ApiConfig::default());
        build_router(state)
    }

    async fn get(app: &Router, uri: &str) -> Response {
        app.clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(app: &Router, uri: &str, body: &str) -> Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app();
        let response = get(&app, "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let app = create_test_app();
        let response = get(&app, "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let app = create_test_app();
        let response = get(&app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["chat_sessions"], 0);
    }

    #[tokio::test]
    async fn test_screen_views() {
        let app = create_test_app();

        let response = get(&app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["screen"], "landing");
        assert_eq!(body["view"]["features"].as_array().unwrap().len(), 6);

        let response = get(&app, "/forum?category=campus-life").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["screen"], "forum");
        assert_eq!(body["view"]["posts"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found_view() {
        let app = create_test_app();
        let response = get(&app, "/does-not-exist").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["screen"], "not-found");
        assert_eq!(body["view"]["path"], "/does-not-exist");
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_api_error() {
        let app = create_test_app();
        let response = get(&app, "/api/v1/nothing-here").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_route_table() {
        let app = create_test_app();
        let body = body_json(get(&app, "/api/v1/routes").await).await;
        assert_eq!(body["total"], 8);
        assert_eq!(body["routes"][6]["path"], "/vr-relaxation");
        assert_eq!(body["routes"][6]["screen"], "vr-relaxation");
    }

    #[tokio::test(start_paused = true)]
    async fn test_chat_round_trip() {
        let app = create_test_app();

        let response = post_json(&app, "/api/v1/chat/sessions", "").await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let session = body_json(response).await;
        let id = session["session_id"].as_str().unwrap().to_string();
        assert_eq!(session["messages"].as_array().unwrap().len(), 1);

        let uri = format!("/api/v1/chat/sessions/{}/messages", id);
        let response = post_json(&app, &uri, r#"{"text": "Hello"}"#).await;
        assert_eq!(response.status(), StatusCode::ACCEPTED);

        // a second send while the bot is typing is refused
        let response = post_json(&app, &uri, r#"{"text": "Still there?"}"#).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let session_uri = format!("/api/v1/chat/sessions/{}", id);
        let session = body_json(get(&app, &session_uri).await).await;
        assert_eq!(session["typing"], true);
        assert_eq!(session["messages"].as_array().unwrap().len(), 2);

        tokio::time::sleep(Duration::from_millis(1600)).await;

        let session = body_json(get(&app, &session_uri).await).await;
        let messages = session["messages"].as_array().unwrap();
        assert_eq!(session["typing"], false);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2]["sender"], "bot");
        assert_eq!(messages[2]["type"], "supportive");
        assert!(is_canned_reply(messages[2]["text"].as_str().unwrap()));
    }

    #[tokio::test]
    async fn test_chat_empty_message_rejected() {
        let app = create_test_app();
        let session = body_json(post_json(&app, "/api/v1/chat/sessions", "").await).await;
        let id = session["session_id"].as_str().unwrap();

        let uri = format!("/api/v1/chat/sessions/{}/messages", id);
        let response = post_json(&app, &uri, r#"{"text": "   "}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let session = body_json(get(&app, &format!("/api/v1/chat/sessions/{}", id)).await).await;
        assert_eq!(session["messages"].as_array().unwrap().len(), 1);
        assert_eq!(session["typing"], false);
    }

    #[tokio::test]
    async fn test_chat_unknown_session() {
        let app = create_test_app();
        let response = get(&app, "/api/v1/chat/sessions/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/v1/chat/sessions/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_resources_search() {
        let app = create_test_app();

        let body = body_json(get(&app, "/api/v1/resources").await).await;
        assert_eq!(body["total"], 6);

        let body = body_json(get(&app, "/api/v1/resources?q=anxiety").await).await;
        let ids: Vec<u64> = body["resources"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 5]);

        let body = body_json(get(&app, "/api/v1/resources?q=zzzz").await).await;
        assert_eq!(body["total"], 0);

        let response = get(&app, "/api/v1/resources?type=podcasts").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_forum_search() {
        let app = create_test_app();

        let body = body_json(get(&app, "/api/v1/forum/posts?q=Anxiety").await).await;
        assert_eq!(body["total"], 2);

        let response = get(&app, "/api/v1/forum/posts?category=gardening").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_calendar() {
        let app = create_test_app();

        let body = body_json(get(&app, "/api/v1/counseling/calendar?from=2099-01-03&days=3").await).await;
        let days = body["days"].as_array().unwrap();
        assert_eq!(days.len(), 3);
        assert_eq!(days[0]["selectable"], false);
        assert_eq!(days[0]["reason"], "weekend");
        assert_eq!(days[2]["selectable"], true);

        let response = get(&app, "/api/v1/counseling/calendar?from=soon").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_booking_check_and_submit() {
        let app = create_test_app();

        let response = post_json(
            &app,
            "/api/v1/counseling/booking/check",
            r#"{"date": "2099-01-05", "time": "2:00 PM"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["can_submit"], false);
        assert_eq!(body["missing"], serde_json::json!(["session_type", "counselor"]));

        let response = post_json(
            &app,
            "/api/v1/counseling/bookings",
            r#"{"date": "2099-01-05", "time": "2:00 PM"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let complete = r#"{"date": "2099-01-05", "time": "2:00 PM", "session_type": "video", "counselor_id": "dr-smith"}"#;
        let body = body_json(post_json(&app, "/api/v1/counseling/booking/check", complete).await).await;
        assert_eq!(body["can_submit"], true);

        let response = post_json(&app, "/api/v1/counseling/bookings", complete).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "confirmed");
        assert_eq!(body["booking"]["counselor_name"], "Dr. Sarah Smith");
        assert!(body["booking"].get("notes").is_none());

        let with_notes = r#"{"date": "2099-01-05", "time": "2:00 PM", "session_type": "video", "counselor_id": "dr-smith", "notes": "Exam anxiety"}"#;
        let body = body_json(post_json(&app, "/api/v1/counseling/bookings", with_notes).await).await;
        assert_eq!(body["booking"]["notes"], "Exam anxiety");

        let only_notes = r#"{"notes": "Exam anxiety"}"#;
        let body = body_json(post_json(&app, "/api/v1/counseling/booking/check", only_notes).await).await;
        assert_eq!(body["can_submit"], false);
        assert_eq!(body["missing"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_booking_rejects_weekend() {
        let app = create_test_app();
        let response = post_json(
            &app,
            "/api/v1/counseling/booking/check",
            r#"{"date": "2099-01-04"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "INVALID_DATE");
    }

    #[tokio::test]
    async fn test_wellness_checkin() {
        let app = create_test_app();

        let response = post_json(&app, "/api/v1/wellness/checkins", r#"{"value": 4}"#).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["label"], "Good");
        assert_eq!(body["tone"], "good");

        let response = post_json(&app, "/api/v1/wellness/checkins", r#"{"value": 9}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = post_json(&app, "/api/v1/wellness/checkins", r#"{"value": 300}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_requests_get_json_errors() {
        let app = create_test_app();

        let responses = vec![
            post_json(&app, "/api/v1/wellness/checkins", r#"{"value": "four"}"#).await,
            post_json(&app, "/api/v1/counseling/bookings", "{not json").await,
            get(&app, "/api/v1/counseling/calendar?days=-1").await,
            get(&app, "/api/v1/admin/analytics?tab=usage&tab=sentiment").await,
            get(&app, "/resources?tab=all&type=all").await,
        ];

        for response in responses {
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = body_json(response).await;
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
            assert!(body["request_id"].is_string());
        }
    }

    #[tokio::test]
    async fn test_vr_environment_lookup() {
        let app = create_test_app();

        let body = body_json(get(&app, "/api/v1/vr/environments/rain-ambiance").await).await;
        assert_eq!(body["category"], "Indoor");

        let response = get(&app, "/api/v1/vr/environments/moon-base").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_admin_analytics_tabs() {
        let app = create_test_app();

        let body = body_json(get(&app, "/api/v1/admin/analytics").await).await;
        assert_eq!(body["panel"]["tab"], "usage");

        let body = body_json(get(&app, "/api/v1/admin/analytics?tab=interventions").await).await;
        assert_eq!(body["panel"]["tab"], "interventions");

        let response = get(&app, "/api/v1/admin/analytics?tab=finance").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
