use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::catalog::dtos::{CatalogPageDto, CourseQueryParams, CourseResponseDto};
use crate::features::catalog::services::CatalogService;
use crate::shared::types::ApiResponse;

/// List courses
///
/// Resolves category/tag/search filters and returns one paginated page.
#[utoipa::path(
    get,
    path = "/api/courses",
    params(CourseQueryParams),
    responses(
        (status = 200, description = "One page of matching courses", body = ApiResponse<CatalogPageDto>),
    ),
    tag = "catalog"
)]
pub async fn list_courses(
    State(service): State<Arc<CatalogService>>,
    Query(params): Query<CourseQueryParams>,
) -> Result<Json<ApiResponse<CatalogPageDto>>> {
    let page = service.resolve(&params).await?;
    Ok(Json(ApiResponse::success(page)))
}

/// Get a single course
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Course found", body = ApiResponse<CourseResponseDto>),
        (status = 404, description = "Course not found")
    ),
    tag = "catalog"
)]
pub async fn get_course(
    State(service): State<Arc<CatalogService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CourseResponseDto>>> {
    let course = service.get(id).await?;
    Ok(Json(ApiResponse::success(course)))
}
