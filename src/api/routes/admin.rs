//! Admin Routes
//!
//! - GET /api/v1/admin/analytics?tab= - One analytics tab

use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};

use crate::api::dto::{AnalyticsQuery, AnalyticsResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::screens::admin::{panel, AnalyticsTab};

/// GET /api/v1/admin/analytics
///
/// Defaults to the usage tab.
pub async fn analytics(
    params: Result<Query<AnalyticsQuery>, QueryRejection>,
) -> ApiResult<Json<AnalyticsResponse>> {
    let Query(params) = params?;
    let tab: AnalyticsTab = params
        .tab
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(ApiError::Validation)?;

    Ok(Json(AnalyticsResponse { panel: panel(tab) }))
}
