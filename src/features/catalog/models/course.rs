use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Course lifecycle status matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "course_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Draft,
    Published,
    Archived,
}

impl CourseStatus {
    /// Whether a course with this status is visible in the public catalog
    pub fn is_published(&self) -> bool {
        matches!(self, CourseStatus::Published)
    }
}

impl std::fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseStatus::Draft => write!(f, "draft"),
            CourseStatus::Published => write!(f, "published"),
            CourseStatus::Archived => write!(f, "archived"),
        }
    }
}

/// Course difficulty level matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "course_level", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseLevel::Beginner => write!(f, "beginner"),
            CourseLevel::Intermediate => write!(f, "intermediate"),
            CourseLevel::Advanced => write!(f, "advanced"),
        }
    }
}

/// Course record, shared between the fixture catalog and the live store
#[derive(Debug, Clone, FromRow)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub category: Option<String>,
    pub status: CourseStatus,
    pub published: bool,
    pub price: i64,
    pub original_price: i64,
    pub duration: Option<i32>,
    pub level: CourseLevel,
    pub is_featured: bool,
    pub tags: Vec<String>,
    pub thumbnail_url: Option<String>,
    pub detail_image_url: Option<String>,
    pub is_early_bird: bool,
    pub discount_percent: Option<i32>,
    pub student_count: i64,
    pub rating: f64,
    pub review_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
