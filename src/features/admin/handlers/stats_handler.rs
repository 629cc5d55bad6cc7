use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::AppError;
use crate::features::admin::dtos::AdminStatsDto;
use crate::features::admin::services::StatsService;
use crate::features::auth::guards::RequireAdmin;
use crate::shared::types::ApiResponse;

/// Admin overview and revenue statistics
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Statistics", body = ApiResponse<AdminStatsDto>),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Admin access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_stats(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<StatsService>>,
) -> Result<Json<ApiResponse<AdminStatsDto>>, AppError> {
    let stats = service.get_stats().await?;
    Ok(Json(ApiResponse::success(stats)))
}
