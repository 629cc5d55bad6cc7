mod course;

pub use course::{Course, CourseLevel, CourseStatus};
