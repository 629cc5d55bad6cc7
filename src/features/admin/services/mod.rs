mod course_admin_service;
mod stats_service;

pub use course_admin_service::CourseAdminService;
pub use stats_service::StatsService;
