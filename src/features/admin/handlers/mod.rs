pub mod course_admin_handler;
pub mod stats_handler;

pub use course_admin_handler::{
    create_course, delete_course, get_course, list_courses, update_course,
};
pub use stats_handler::get_stats;
