use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::catalog::models::{Course, CourseLevel, CourseStatus};
use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Query params for the public course listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct CourseQueryParams {
    /// Category label ("all" or absent means every category)
    pub category: Option<String>,
    /// Tag filter; "early-bird" selects the promotional set
    pub tag: Option<String>,
    /// Case-insensitive substring match on title or description
    pub search: Option<String>,
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,
    /// Items per page (default: 12, max: 100)
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

impl Default for CourseQueryParams {
    fn default() -> Self {
        Self {
            category: None,
            tag: None,
            search: None,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CourseQueryParams {
    /// Slice offset from the 1-indexed page number
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1) * self.limit()
    }

    /// Clamped page size (respects MAX_PAGE_SIZE)
    pub fn limit(&self) -> i64 {
        self.limit.clamp(1, MAX_PAGE_SIZE)
    }
}

/// Pagination block of a catalog page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PaginationMeta {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        let limit = limit.max(1);
        Self {
            page,
            limit,
            total,
            total_pages: (total + limit - 1) / limit,
        }
    }
}

/// Public view of a course
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponseDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub instructor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub status: CourseStatus,
    pub published: bool,
    pub price: i64,
    pub original_price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    pub level: CourseLevel,
    pub is_featured: bool,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_image_url: Option<String>,
    pub is_early_bird: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<i32>,
    pub student_count: i64,
    pub rating: f64,
    pub review_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Course> for CourseResponseDto {
    fn from(c: Course) -> Self {
        Self {
            id: c.id,
            title: c.title,
            description: c.description,
            instructor: c.instructor,
            category: c.category,
            status: c.status,
            published: c.published,
            price: c.price,
            original_price: c.original_price,
            duration: c.duration,
            level: c.level,
            is_featured: c.is_featured,
            tags: c.tags,
            thumbnail_url: c.thumbnail_url,
            detail_image_url: c.detail_image_url,
            is_early_bird: c.is_early_bird,
            discount_percent: c.discount_percent,
            student_count: c.student_count,
            rating: c.rating,
            review_count: c.review_count,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// One resolved catalog page: courses plus the pagination block
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogPageDto {
    pub courses: Vec<CourseResponseDto>,
    pub pagination: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_meta_rounds_up() {
        let meta = PaginationMeta::new(1, 12, 25);
        assert_eq!(meta.total_pages, 3);

        let meta = PaginationMeta::new(1, 12, 24);
        assert_eq!(meta.total_pages, 2);

        let meta = PaginationMeta::new(1, 2, 8);
        assert_eq!(meta.total_pages, 4);
    }

    #[test]
    fn test_pagination_meta_empty_total() {
        let meta = PaginationMeta::new(1, 12, 0);
        assert_eq!(meta.total_pages, 0);
    }

    #[test]
    fn test_query_params_offset_and_clamp() {
        let params = CourseQueryParams {
            page: 3,
            limit: 12,
            ..Default::default()
        };
        assert_eq!(params.offset(), 24);

        let params = CourseQueryParams {
            page: 0,
            limit: 500,
            ..Default::default()
        };
        assert_eq!(params.limit(), 100);
        assert_eq!(params.offset(), 0);
    }
}
