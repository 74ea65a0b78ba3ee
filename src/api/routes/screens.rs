//! Screen Routes
//!
//! Page views resolved through the view router.
//!
//! - GET /api/v1/routes - The route table
//! - GET <any other path> - View document for the screen at that path

use axum::{
    extract::{rejection::QueryRejection, Query},
    http::{Method, StatusCode, Uri},
    Json,
};

use crate::api::dto::{RouteListResponse, ViewDocument};
use crate::api::error::{ApiError, ApiResult};
use crate::screens::{render_path, router, routes, ViewQuery};

/// GET /api/v1/routes
pub async fn list_routes() -> Json<RouteListResponse> {
    let routes = routes().to_vec();
    Json(RouteListResponse {
        total: routes.len(),
        routes,
    })
}

/// Fallback for every path the API router does not claim.
///
/// Known screens answer 200, anything else a 404 NotFound view. Unmatched
/// `/api/` paths get a plain API error instead of a page.
pub async fn view_fallback(
    method: Method,
    uri: Uri,
    query: Result<Query<ViewQuery>, QueryRejection>,
) -> ApiResult<(StatusCode, Json<ViewDocument>)> {
    let path = uri.path();

    if path == "/api" || path.starts_with("/api/") {
        return Err(ApiError::NotFound(format!("No API route for {} {}", method, path)));
    }
    if method != Method::GET && method != Method::HEAD {
        return Err(ApiError::Validation(format!(
            "Screens only answer GET, got {}",
            method
        )));
    }

    let Query(query) = query?;
    let view = render_path(path, &query)?;
    let screen = view.screen();
    let status = if screen.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    tracing::debug!(path = %path, screen = ?screen, "Rendered screen");

    Ok((
        status,
        Json(ViewDocument {
            path: path.to_string(),
            title: router::title(screen).to_string(),
            view,
        }),
    ))
}
