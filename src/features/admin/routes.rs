use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::admin::handlers;
use crate::features::admin::services::{CourseAdminService, StatsService};

/// Create admin routes (all require the admin role)
pub fn routes(
    course_service: Arc<CourseAdminService>,
    stats_service: Arc<StatsService>,
) -> Router {
    let courses = Router::new()
        .route(
            "/courses",
            get(handlers::list_courses).post(handlers::create_course),
        )
        .route(
            "/courses/{id}",
            put(handlers::update_course)
                .get(handlers::get_course)
                .delete(handlers::delete_course),
        )
        .with_state(course_service);

    let stats = Router::new()
        .route("/stats", get(handlers::get_stats))
        .with_state(stats_service);

    courses.merge(stats)
}
