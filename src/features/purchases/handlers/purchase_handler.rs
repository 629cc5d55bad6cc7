use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::AppError;
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::purchases::dtos::{
    CreatePurchaseDto, PurchaseResponseDto, RefundPurchaseDto,
};
use crate::features::purchases::services::PurchaseService;
use crate::shared::types::ApiResponse;

/// Record a purchase for the authenticated user
///
/// Settlement is instant: the purchase is created as completed and a
/// zero-progress tracking record is initialized for the pair.
#[utoipa::path(
    post,
    path = "/api/purchases",
    tag = "purchases",
    request_body = CreatePurchaseDto,
    responses(
        (status = 201, description = "Purchase recorded", body = ApiResponse<PurchaseResponseDto>),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Course not found"),
        (status = 409, description = "Course already purchased")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_purchase(
    user: AuthenticatedUser,
    State(service): State<Arc<PurchaseService>>,
    AppJson(dto): AppJson<CreatePurchaseDto>,
) -> Result<(StatusCode, Json<ApiResponse<PurchaseResponseDto>>), AppError> {
    let purchase = service.purchase(&user.sub, dto.course_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(purchase)),
    ))
}

/// List the authenticated user's completed purchases
#[utoipa::path(
    get,
    path = "/api/purchases",
    tag = "purchases",
    responses(
        (status = 200, description = "Purchase history", body = ApiResponse<Vec<PurchaseResponseDto>>),
        (status = 401, description = "Authentication required")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_purchases(
    user: AuthenticatedUser,
    State(service): State<Arc<PurchaseService>>,
) -> Result<Json<ApiResponse<Vec<PurchaseResponseDto>>>, AppError> {
    let purchases = service.list(&user.sub).await?;
    Ok(Json(ApiResponse::success(purchases)))
}

/// Refund a completed purchase
///
/// Requires a non-empty reason. The progress record is left untouched.
#[utoipa::path(
    post,
    path = "/api/admin/purchases/{id}/refund",
    tag = "admin",
    params(
        ("id" = Uuid, Path, description = "Purchase id")
    ),
    request_body = RefundPurchaseDto,
    responses(
        (status = 200, description = "Purchase refunded", body = ApiResponse<PurchaseResponseDto>),
        (status = 400, description = "Missing refund reason"),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Purchase not found"),
        (status = 409, description = "Purchase is not refundable")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn refund_purchase(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<PurchaseService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<RefundPurchaseDto>,
) -> Result<Json<ApiResponse<PurchaseResponseDto>>, AppError> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let purchase = service.refund(id, &dto.reason).await?;
    Ok(Json(ApiResponse::success(purchase)))
}
