use axum::{
    extract::{Multipart, State},
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::core::error::AppError;
use crate::features::auth::guards::RequireAdmin;
use crate::features::uploads::dtos::{ImageSlot, UploadImageForm, UploadImageResponseDto};
use crate::features::uploads::services::UploadService;
use crate::shared::types::ApiResponse;

/// Upload a course image
///
/// Accepts multipart/form-data with:
/// - `file`: the image to upload (required)
/// - `type`: target slot, "thumbnail" or "detail" (required)
#[utoipa::path(
    post,
    path = "/api/admin/upload",
    tag = "admin",
    request_body(
        content = UploadImageForm,
        content_type = "multipart/form-data",
        description = "Image upload form with a target slot",
    ),
    responses(
        (status = 200, description = "Image stored", body = ApiResponse<UploadImageResponseDto>),
        (status = 400, description = "Missing file, wrong MIME type, or file too large"),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Admin access required")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload_image(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<UploadService>>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<UploadImageResponseDto>>, AppError> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;
    let mut content_type: Option<String> = None;
    let mut slot: Option<ImageSlot> = None;

    // Process multipart fields
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                let ct = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let fname = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                file_data = Some(data.to_vec());
                file_name = Some(fname);
                content_type = Some(ct);
            }
            "type" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read type field: {}", e))
                })?;
                slot = Some(ImageSlot::parse(&text).ok_or_else(|| {
                    AppError::BadRequest(
                        "Upload type must be 'thumbnail' or 'detail'".to_string(),
                    )
                })?);
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let file_data = file_data.ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;
    let file_name =
        file_name.ok_or_else(|| AppError::BadRequest("Filename is required".to_string()))?;
    let content_type =
        content_type.ok_or_else(|| AppError::BadRequest("Content type is required".to_string()))?;
    let slot = slot.ok_or_else(|| AppError::BadRequest("Upload type is required".to_string()))?;

    let url = service
        .upload_course_image(slot, file_data, &content_type, &file_name)
        .await?;

    Ok(Json(ApiResponse::success(UploadImageResponseDto { url })))
}
