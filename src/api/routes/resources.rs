//! Resource Routes
//!
//! - GET /api/v1/resources?q=&type= - Search the Resource Hub

use axum::extract::{rejection::QueryRejection, Query};
use axum::Json;

use crate::api::dto::{ResourceListResponse, ResourceQuery};
use crate::api::error::{ApiError, ApiResult};
use crate::catalog::{resources, search_resources, ResourceTab};

/// GET /api/v1/resources
///
/// Text search first, then the type tab. `featured` follows the text only.
pub async fn list_resources(
    params: Result<Query<ResourceQuery>, QueryRejection>,
) -> ApiResult<Json<ResourceListResponse>> {
    let Query(params) = params?;
    let tab: ResourceTab = params
        .kind
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(ApiError::Validation)?;
    let query = params.q.unwrap_or_default();

    let listing = search_resources(&resources(), &query, tab);

    Ok(Json(ResourceListResponse {
        query,
        kind: tab.to_string(),
        total: listing.resources.len(),
        featured: listing.featured,
        resources: listing.resources,
    }))
}
