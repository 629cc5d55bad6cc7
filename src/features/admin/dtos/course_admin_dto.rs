use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::catalog::models::{Course, CourseLevel, CourseStatus};
use crate::shared::constants::{DEFAULT_PAGE_SIZE, FREE_CATEGORY, MAX_PAGE_SIZE};

/// Request DTO for creating a course
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseDto {
    #[validate(length(min = 1, max = 500, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    /// Recommended but not enforced at this boundary
    pub instructor: Option<String>,

    pub category: Option<String>,

    /// Defaults to draft
    pub status: Option<CourseStatus>,

    pub price: Option<i64>,
    pub original_price: Option<i64>,
    pub duration: Option<i32>,

    /// Defaults to beginner
    pub level: Option<CourseLevel>,

    pub is_featured: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub thumbnail_url: Option<String>,
    pub detail_image_url: Option<String>,
    pub is_early_bird: Option<bool>,
    pub discount_percent: Option<i32>,
}

/// Normalized course data, ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
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
}

impl CreateCourseDto {
    /// Apply defaults and the pricing invariant: free-category courses are
    /// always zero-priced, and `published` follows the status.
    pub fn normalize(self) -> NewCourse {
        let status = self.status.unwrap_or(CourseStatus::Draft);
        let category = self.category.filter(|c| !c.trim().is_empty());
        let is_free = category.as_deref() == Some(FREE_CATEGORY);

        NewCourse {
            title: self.title,
            description: self.description,
            instructor: self.instructor.unwrap_or_default(),
            published: status.is_published(),
            status,
            price: if is_free { 0 } else { self.price.unwrap_or(0) },
            original_price: if is_free {
                0
            } else {
                self.original_price.unwrap_or(0)
            },
            duration: self.duration,
            level: self.level.unwrap_or(CourseLevel::Beginner),
            is_featured: self.is_featured.unwrap_or(false),
            tags: self.tags.unwrap_or_default(),
            thumbnail_url: self.thumbnail_url,
            detail_image_url: self.detail_image_url,
            is_early_bird: self.is_early_bird.unwrap_or(false),
            discount_percent: self.discount_percent,
            category,
        }
    }
}

/// Sparse patch for updating a course: only the fields present in the
/// request change
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub instructor: Option<String>,
    /// An empty label normalizes to no category
    pub category: Option<String>,
    pub status: Option<CourseStatus>,
    pub price: Option<i64>,
    pub original_price: Option<i64>,
    pub duration: Option<i32>,
    pub level: Option<CourseLevel>,
    pub is_featured: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub thumbnail_url: Option<String>,
    pub detail_image_url: Option<String>,
    pub is_early_bird: Option<bool>,
    pub discount_percent: Option<i32>,
}

impl UpdateCourseDto {
    /// Merge the patch into an existing course. `published` tracks the
    /// status, and the free-category pricing invariant is re-applied after
    /// the merge.
    pub fn apply_to(self, course: &mut Course) {
        if let Some(title) = self.title {
            course.title = title;
        }
        if let Some(description) = self.description {
            course.description = description;
        }
        if let Some(instructor) = self.instructor {
            course.instructor = instructor;
        }
        if let Some(category) = self.category {
            course.category = if category.trim().is_empty() {
                None
            } else {
                Some(category)
            };
        }
        if let Some(status) = self.status {
            course.status = status;
            course.published = status.is_published();
        }
        if let Some(price) = self.price {
            course.price = price;
        }
        if let Some(original_price) = self.original_price {
            course.original_price = original_price;
        }
        if let Some(duration) = self.duration {
            course.duration = Some(duration);
        }
        if let Some(level) = self.level {
            course.level = level;
        }
        if let Some(is_featured) = self.is_featured {
            course.is_featured = is_featured;
        }
        if let Some(tags) = self.tags {
            course.tags = tags;
        }
        if let Some(thumbnail_url) = self.thumbnail_url {
            course.thumbnail_url = Some(thumbnail_url);
        }
        if let Some(detail_image_url) = self.detail_image_url {
            course.detail_image_url = Some(detail_image_url);
        }
        if let Some(is_early_bird) = self.is_early_bird {
            course.is_early_bird = is_early_bird;
        }
        if let Some(discount_percent) = self.discount_percent {
            course.discount_percent = Some(discount_percent);
        }

        if course.category.as_deref() == Some(FREE_CATEGORY) {
            course.price = 0;
            course.original_price = 0;
        }
    }
}

/// Query params for the admin course list (all statuses)
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AdminCourseQueryParams {
    /// Filter by status
    pub status: Option<CourseStatus>,
    /// Filter by category label
    pub category: Option<String>,
    /// Search in title or description
    pub search: Option<String>,
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,
    /// Items per page
    #[serde(default = "default_limit")]
    #[param(minimum = 1, maximum = 100)]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl AdminCourseQueryParams {
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1) * self.limit()
    }

    pub fn limit(&self) -> i64 {
        self.limit.clamp(1, MAX_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn create_dto(category: Option<&str>, status: Option<CourseStatus>) -> CreateCourseDto {
        CreateCourseDto {
            title: "Rust for Backend Engineers".to_string(),
            description: "A field guide".to_string(),
            instructor: None,
            category: category.map(String::from),
            status,
            price: Some(50_000),
            original_price: Some(60_000),
            duration: None,
            level: None,
            is_featured: None,
            tags: None,
            thumbnail_url: None,
            detail_image_url: None,
            is_early_bird: None,
            discount_percent: None,
        }
    }

    fn existing_course() -> Course {
        let now = Utc::now();
        Course {
            id: Uuid::new_v4(),
            title: "Old title".to_string(),
            description: "Old description".to_string(),
            instructor: "Kim".to_string(),
            category: Some("design".to_string()),
            status: CourseStatus::Published,
            published: true,
            price: 80_000,
            original_price: 90_000,
            duration: Some(120),
            level: CourseLevel::Intermediate,
            is_featured: false,
            tags: vec!["design".to_string()],
            thumbnail_url: None,
            detail_image_url: None,
            is_early_bird: false,
            discount_percent: None,
            student_count: 0,
            rating: 0.0,
            review_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_create_zero_prices_free_category() {
        let new = create_dto(Some("free"), None).normalize();
        assert_eq!(new.price, 0);
        assert_eq!(new.original_price, 0);

        let new = create_dto(Some("design"), None).normalize();
        assert_eq!(new.price, 50_000);
        assert_eq!(new.original_price, 60_000);
    }

    #[test]
    fn test_create_derives_published_from_status() {
        let new = create_dto(None, Some(CourseStatus::Published)).normalize();
        assert!(new.published);

        let new = create_dto(None, None).normalize();
        assert_eq!(new.status, CourseStatus::Draft);
        assert!(!new.published);
    }

    #[test]
    fn test_create_defaults() {
        let new = create_dto(None, None).normalize();
        assert_eq!(new.level, CourseLevel::Beginner);
        assert_eq!(new.instructor, "");
        assert!(new.tags.is_empty());
        assert!(new.category.is_none());
    }

    #[test]
    fn test_patch_changes_only_present_fields() {
        let mut course = existing_course();
        let patch = UpdateCourseDto {
            title: Some("New title".to_string()),
            ..Default::default()
        };

        patch.apply_to(&mut course);

        assert_eq!(course.title, "New title");
        assert_eq!(course.description, "Old description");
        assert_eq!(course.price, 80_000);
    }

    #[test]
    fn test_patch_empty_category_normalizes_to_none() {
        let mut course = existing_course();
        let patch = UpdateCourseDto {
            category: Some("".to_string()),
            ..Default::default()
        };

        patch.apply_to(&mut course);
        assert!(course.category.is_none());
    }

    #[test]
    fn test_patch_to_free_category_zeroes_prices() {
        let mut course = existing_course();
        let patch = UpdateCourseDto {
            category: Some("free".to_string()),
            ..Default::default()
        };

        patch.apply_to(&mut course);
        assert_eq!(course.price, 0);
        assert_eq!(course.original_price, 0);
    }

    #[test]
    fn test_patch_status_tracks_published() {
        let mut course = existing_course();
        let patch = UpdateCourseDto {
            status: Some(CourseStatus::Archived),
            ..Default::default()
        };

        patch.apply_to(&mut course);
        assert_eq!(course.status, CourseStatus::Archived);
        assert!(!course.published);
    }
}
