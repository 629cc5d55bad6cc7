use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::core::error::Result;
use crate::features::uploads::dtos::{object_name, validate_image, ImageSlot};
use crate::modules::storage::MinioClient;

/// Service for course image uploads
pub struct UploadService {
    storage: Arc<MinioClient>,
}

impl UploadService {
    pub fn new(storage: Arc<MinioClient>) -> Self {
        Self { storage }
    }

    /// Validate and store one course image, returning its public URL.
    ///
    /// The object name is derived from the slot, the current timestamp, and
    /// the original extension, so re-uploads never collide.
    pub async fn upload_course_image(
        &self,
        slot: ImageSlot,
        data: Vec<u8>,
        content_type: &str,
        original_filename: &str,
    ) -> Result<String> {
        validate_image(content_type, data.len())?;

        let name = object_name(slot, Utc::now().timestamp_millis(), original_filename);
        let key = format!("{}/{}", slot.prefix(), name);

        self.storage.upload(&key, data, content_type).await?;

        let url = self.storage.public_url(&key);

        info!("Course image uploaded: slot={}, key={}", slot, key);

        Ok(url)
    }
}
