//! Forum Routes
//!
//! - GET /api/v1/forum/posts?q=&category= - Search forum posts

use axum::extract::{rejection::QueryRejection, Query};
use axum::Json;

use crate::api::dto::{ForumListResponse, ForumQuery};
use crate::api::error::{ApiError, ApiResult};
use crate::catalog::{forum_categories, forum_posts, search_posts};

/// GET /api/v1/forum/posts
pub async fn list_posts(
    params: Result<Query<ForumQuery>, QueryRejection>,
) -> ApiResult<Json<ForumListResponse>> {
    let Query(params) = params?;
    let query = params.q.unwrap_or_default();
    let category = params
        .category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| "all".to_string());

    let posts = search_posts(&forum_posts(), &forum_categories(), &query, Some(&category))
        .ok_or_else(|| ApiError::Validation(format!("Unknown forum category '{}'", category)))?;

    Ok(Json(ForumListResponse {
        query,
        category,
        total: posts.len(),
        posts,
    }))
}
