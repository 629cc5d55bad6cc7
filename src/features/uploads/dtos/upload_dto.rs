use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::AppError;
use crate::shared::constants::MAX_UPLOAD_BYTES;

/// Target slot for an uploaded course image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImageSlot {
    Thumbnail,
    Detail,
}

impl ImageSlot {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "thumbnail" => Some(ImageSlot::Thumbnail),
            "detail" => Some(ImageSlot::Detail),
            _ => None,
        }
    }

    /// Object-store prefix for this slot
    pub fn prefix(&self) -> &'static str {
        match self {
            ImageSlot::Thumbnail => "thumbnails",
            ImageSlot::Detail => "details",
        }
    }
}

impl std::fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSlot::Thumbnail => write!(f, "thumbnail"),
            ImageSlot::Detail => write!(f, "detail"),
        }
    }
}

/// Multipart form for the image upload endpoint (documentation only)
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadImageForm {
    /// The image file
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    /// Target slot: "thumbnail" or "detail"
    #[schema(example = "thumbnail")]
    pub r#type: String,
}

/// Response DTO for a stored image
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadImageResponseDto {
    /// Public URL of the stored image
    pub url: String,
}

/// Reject non-image payloads and anything over the upload ceiling, before
/// any storage call is made.
pub fn validate_image(content_type: &str, size: usize) -> Result<(), AppError> {
    if !content_type.starts_with("image/") {
        return Err(AppError::BadRequest(
            "Only image files can be uploaded".to_string(),
        ));
    }

    if size > MAX_UPLOAD_BYTES {
        return Err(AppError::BadRequest(format!(
            "File size must not exceed {} MB",
            MAX_UPLOAD_BYTES / 1024 / 1024
        )));
    }

    Ok(())
}

/// Collision-resistant object name: `{slot}_{timestamp}.{ext}`, extension
/// taken from the original filename.
pub fn object_name(slot: ImageSlot, timestamp_millis: i64, original_filename: &str) -> String {
    let ext = original_filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
        .unwrap_or("bin");

    format!("{}_{}.{}", slot, timestamp_millis, ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_small_png() {
        assert!(validate_image("image/png", 1024 * 1024).is_ok());
    }

    #[test]
    fn test_validate_rejects_non_image_mime() {
        let err = validate_image("text/plain", 1024).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_validate_rejects_oversized_payload() {
        // 11 MiB is over the 10 MiB ceiling
        let err = validate_image("image/png", 11 * 1024 * 1024).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        // exactly at the ceiling is fine
        assert!(validate_image("image/png", MAX_UPLOAD_BYTES).is_ok());
    }

    #[test]
    fn test_object_name_pattern() {
        let name = object_name(ImageSlot::Thumbnail, 1736899200000, "cover.PNG");
        assert_eq!(name, "thumbnail_1736899200000.PNG");

        let name = object_name(ImageSlot::Detail, 42, "photo.final.jpg");
        assert_eq!(name, "detail_42.jpg");
    }

    #[test]
    fn test_object_name_without_extension() {
        let name = object_name(ImageSlot::Detail, 42, "photo");
        assert_eq!(name, "detail_42.bin");
    }

    #[test]
    fn test_slot_parse() {
        assert_eq!(ImageSlot::parse("thumbnail"), Some(ImageSlot::Thumbnail));
        assert_eq!(ImageSlot::parse("detail"), Some(ImageSlot::Detail));
        assert_eq!(ImageSlot::parse("banner"), None);
    }
}
