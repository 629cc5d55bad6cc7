pub mod catalog_handler;

pub use catalog_handler::{get_course, list_courses};
