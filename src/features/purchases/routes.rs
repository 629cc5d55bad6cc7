use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::purchases::handlers;
use crate::features::purchases::services::PurchaseService;

/// Create routes for purchase recording and history (authenticated users)
pub fn routes(service: Arc<PurchaseService>) -> Router {
    Router::new()
        .route(
            "/api/purchases",
            post(handlers::create_purchase).get(handlers::list_purchases),
        )
        .with_state(service)
}

/// Create admin routes for purchase management (refunds)
pub fn admin_routes(service: Arc<PurchaseService>) -> Router {
    Router::new()
        .route(
            "/purchases/{id}/refund",
            post(handlers::refund_purchase),
        )
        .with_state(service)
}
