use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::uploads::handlers;
use crate::features::uploads::services::UploadService;

/// Create admin routes for course image uploads
pub fn admin_routes(service: Arc<UploadService>) -> Router {
    Router::new()
        .route("/upload", post(handlers::upload_image))
        .with_state(service)
}
