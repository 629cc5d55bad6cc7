use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::AppError;
use crate::core::extractor::AppJson;
use crate::features::admin::dtos::{AdminCourseQueryParams, CreateCourseDto, UpdateCourseDto};
use crate::features::admin::services::CourseAdminService;
use crate::features::auth::guards::RequireAdmin;
use crate::features::catalog::dtos::{CatalogPageDto, CourseResponseDto, PaginationMeta};
use crate::shared::types::ApiResponse;

/// List courses for the back office
///
/// Includes drafts and archived courses; filters mirror the public catalog.
#[utoipa::path(
    get,
    path = "/api/admin/courses",
    params(AdminCourseQueryParams),
    responses(
        (status = 200, description = "One page of courses", body = ApiResponse<CatalogPageDto>),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Admin access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_courses(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<CourseAdminService>>,
    Query(params): Query<AdminCourseQueryParams>,
) -> Result<Json<ApiResponse<CatalogPageDto>>, AppError> {
    let (courses, total) = service.list(&params).await?;

    Ok(Json(ApiResponse::success(CatalogPageDto {
        courses,
        pagination: PaginationMeta::new(params.page.max(1), params.limit(), total),
    })))
}

/// Get a single course regardless of status
#[utoipa::path(
    get,
    path = "/api/admin/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Course found", body = ApiResponse<CourseResponseDto>),
        (status = 404, description = "Course not found")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_course(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<CourseAdminService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CourseResponseDto>>, AppError> {
    let course = service.get(id).await?;
    Ok(Json(ApiResponse::success(course)))
}

/// Create a course
///
/// Title and description are required; free-category courses are stored
/// zero-priced and `published` follows the status.
#[utoipa::path(
    post,
    path = "/api/admin/courses",
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created", body = ApiResponse<CourseResponseDto>),
        (status = 400, description = "Missing required field"),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Admin access required"),
        (status = 409, description = "Duplicate course title")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_course(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<CourseAdminService>>,
    AppJson(dto): AppJson<CreateCourseDto>,
) -> Result<(StatusCode, Json<ApiResponse<CourseResponseDto>>), AppError> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let course = service.create(dto.normalize()).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(course))))
}

/// Update a course with a sparse patch
///
/// Only fields present in the body change; updated-at is always stamped.
#[utoipa::path(
    put,
    path = "/api/admin/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course id")
    ),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Course updated"),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Course not found")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_course(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<CourseAdminService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateCourseDto>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    service.update(id, dto).await?;
    Ok(Json(ApiResponse::<()>::ok()))
}

/// Delete a course
///
/// Rejected while purchases reference the course.
#[utoipa::path(
    delete,
    path = "/api/admin/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Course deleted"),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Course not found"),
        (status = 409, description = "Course has recorded purchases")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_course(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<CourseAdminService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::<()>::ok()))
}
