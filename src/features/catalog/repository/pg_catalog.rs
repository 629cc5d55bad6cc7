use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::catalog::models::Course;
use crate::shared::constants::EARLY_BIRD_TAG;

use super::{CatalogFilter, CatalogPage, CatalogRepository};

/// Catalog backed by the live courses table. Only published courses are
/// visible through this repository; drafts stay in the admin surface.
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Normalize the filter into SQL binds: "all"/absent category means no
    /// category restriction, the early-bird tag becomes a flag filter.
    fn binds(filter: &CatalogFilter) -> (Option<&str>, Option<bool>, Option<&str>) {
        let category = match filter.category.as_deref() {
            None | Some("all") => None,
            Some(label) => Some(label),
        };
        let early_bird = (filter.tag.as_deref() == Some(EARLY_BIRD_TAG)).then_some(true);
        (category, early_bird, filter.search.as_deref())
    }
}

const SELECT_COLUMNS: &str = "id, title, description, instructor, category, status, published, \
     price, original_price, duration, level, is_featured, tags, thumbnail_url, \
     detail_image_url, is_early_bird, discount_percent, student_count, rating, \
     review_count, created_at, updated_at";

#[async_trait]
impl CatalogRepository for PgCatalog {
    async fn query(&self, filter: &CatalogFilter) -> Result<CatalogPage> {
        let (category, early_bird, search) = Self::binds(filter);

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM courses
            WHERE published = TRUE
              AND ($1::text IS NULL OR category = $1)
              AND ($2::boolean IS NULL OR is_early_bird = $2)
              AND ($3::text IS NULL
                   OR title ILIKE '%' || $3 || '%'
                   OR description ILIKE '%' || $3 || '%')
            "#,
        )
        .bind(category)
        .bind(early_bird)
        .bind(search)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count courses: {:?}", e);
            AppError::Database(e)
        })?;

        let items = sqlx::query_as::<_, Course>(&format!(
            r#"
            SELECT {SELECT_COLUMNS}
            FROM courses
            WHERE published = TRUE
              AND ($1::text IS NULL OR category = $1)
              AND ($2::boolean IS NULL OR is_early_bird = $2)
              AND ($3::text IS NULL
                   OR title ILIKE '%' || $3 || '%'
                   OR description ILIKE '%' || $3 || '%')
            ORDER BY created_at DESC
            OFFSET $4 LIMIT $5
            "#
        ))
        .bind(category)
        .bind(early_bird)
        .bind(search)
        .bind(filter.offset)
        .bind(filter.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch courses: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(CatalogPage { items, total })
    }

    async fn find(&self, id: Uuid) -> Result<Option<Course>> {
        sqlx::query_as::<_, Course>(&format!(
            "SELECT {SELECT_COLUMNS} FROM courses WHERE id = $1 AND published = TRUE"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch course {}: {:?}", id, e);
            AppError::Database(e)
        })
    }
}
