use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::catalog::handlers;
use crate::features::catalog::services::CatalogService;

/// Create routes for the public catalog
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<CatalogService>) -> Router {
    Router::new()
        .route("/api/courses", get(handlers::list_courses))
        .route("/api/courses/{id}", get(handlers::get_course))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog::repository::FixtureCatalog;
    use axum_test::TestServer;
    use serde_json::Value;
    use uuid::Uuid;

    fn server() -> TestServer {
        let service = Arc::new(CatalogService::new(Arc::new(FixtureCatalog::new())));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_list_free_courses_returns_envelope_with_pagination() {
        let server = server();

        let res = server
            .get("/api/courses")
            .add_query_param("category", "free")
            .add_query_param("page", "1")
            .add_query_param("limit", "2")
            .await;

        res.assert_status_ok();
        let body: Value = res.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["courses"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"]["pagination"]["total"], 8);
        assert_eq!(body["data"]["pagination"]["totalPages"], 4);
    }

    #[tokio::test]
    async fn test_early_bird_tag_returns_only_early_bird_items() {
        let server = server();

        let res = server
            .get("/api/courses")
            .add_query_param("tag", "early-bird")
            .add_query_param("category", "design")
            .await;

        res.assert_status_ok();
        let body: Value = res.json();
        let courses = body["data"]["courses"].as_array().unwrap();
        assert_eq!(courses.len(), 6);
        assert!(courses.iter().all(|c| c["isEarlyBird"] == true));
    }

    #[tokio::test]
    async fn test_unknown_course_returns_error_envelope() {
        let server = server();

        let res = server.get(&format!("/api/courses/{}", Uuid::new_v4())).await;

        res.assert_status_not_found();
        let body: Value = res.json();
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());
    }
}
