use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::admin::dtos::{AdminCourseQueryParams, NewCourse, UpdateCourseDto};
use crate::features::catalog::dtos::CourseResponseDto;
use crate::features::catalog::models::Course;

const COURSE_COLUMNS: &str = "id, title, description, instructor, category, status, published, \
     price, original_price, duration, level, is_featured, tags, thumbnail_url, \
     detail_image_url, is_early_bird, discount_percent, student_count, rating, \
     review_count, created_at, updated_at";

/// Service for admin course mutations and the back-office course list
pub struct CourseAdminService {
    pool: PgPool,
}

impl CourseAdminService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a normalized course draft. Constraint violations flow out as
    /// database errors and are classified into the write-failure taxonomy at
    /// the response boundary.
    pub async fn create(&self, new: NewCourse) -> Result<CourseResponseDto> {
        let course = sqlx::query_as::<_, Course>(&format!(
            r#"
            INSERT INTO courses (
                title, description, instructor, category, status, published,
                price, original_price, duration, level, is_featured, tags,
                thumbnail_url, detail_image_url, is_early_bird, discount_percent
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING {COURSE_COLUMNS}
            "#
        ))
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.instructor)
        .bind(&new.category)
        .bind(new.status)
        .bind(new.published)
        .bind(new.price)
        .bind(new.original_price)
        .bind(new.duration)
        .bind(new.level)
        .bind(new.is_featured)
        .bind(&new.tags)
        .bind(&new.thumbnail_url)
        .bind(&new.detail_image_url)
        .bind(new.is_early_bird)
        .bind(new.discount_percent)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create course '{}': {:?}", new.title, e);
            AppError::Database(e)
        })?;

        tracing::info!("Course created: id={}, title={}", course.id, course.title);

        Ok(course.into())
    }

    /// Apply a sparse patch: fetch, merge in memory, write back with a fresh
    /// updated-at stamp.
    pub async fn update(&self, id: Uuid, patch: UpdateCourseDto) -> Result<()> {
        let mut course = self
            .fetch(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        patch.apply_to(&mut course);

        sqlx::query(
            r#"
            UPDATE courses
            SET title = $2, description = $3, instructor = $4, category = $5,
                status = $6, published = $7, price = $8, original_price = $9,
                duration = $10, level = $11, is_featured = $12, tags = $13,
                thumbnail_url = $14, detail_image_url = $15, is_early_bird = $16,
                discount_percent = $17, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&course.title)
        .bind(&course.description)
        .bind(&course.instructor)
        .bind(&course.category)
        .bind(course.status)
        .bind(course.published)
        .bind(course.price)
        .bind(course.original_price)
        .bind(course.duration)
        .bind(course.level)
        .bind(course.is_featured)
        .bind(&course.tags)
        .bind(&course.thumbnail_url)
        .bind(&course.detail_image_url)
        .bind(course.is_early_bird)
        .bind(course.discount_percent)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update course {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        tracing::info!("Course updated: id={}", id);

        Ok(())
    }

    /// Delete a course. Deletion is restricted while purchases reference the
    /// course, so settled history keeps its target.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let referenced: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM purchases WHERE course_id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check purchases for course {}: {:?}", id, e);
                    AppError::Database(e)
                })?;

        if referenced {
            return Err(AppError::Conflict(
                "Course has recorded purchases and cannot be deleted".to_string(),
            ));
        }

        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete course {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Course not found".to_string()));
        }

        tracing::info!("Course deleted: id={}", id);

        Ok(())
    }

    /// List courses for the back office (all statuses), with the same
    /// category/search filtering as the public catalog.
    pub async fn list(
        &self,
        params: &AdminCourseQueryParams,
    ) -> Result<(Vec<CourseResponseDto>, i64)> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM courses
            WHERE ($1::course_status IS NULL OR status = $1)
              AND ($2::text IS NULL OR category = $2)
              AND ($3::text IS NULL
                   OR title ILIKE '%' || $3 || '%'
                   OR description ILIKE '%' || $3 || '%')
            "#,
        )
        .bind(params.status)
        .bind(params.category.as_deref())
        .bind(params.search.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count admin courses: {:?}", e);
            AppError::Database(e)
        })?;

        let rows = sqlx::query_as::<_, Course>(&format!(
            r#"
            SELECT {COURSE_COLUMNS}
            FROM courses
            WHERE ($1::course_status IS NULL OR status = $1)
              AND ($2::text IS NULL OR category = $2)
              AND ($3::text IS NULL
                   OR title ILIKE '%' || $3 || '%'
                   OR description ILIKE '%' || $3 || '%')
            ORDER BY created_at DESC
            OFFSET $4 LIMIT $5
            "#
        ))
        .bind(params.status)
        .bind(params.category.as_deref())
        .bind(params.search.as_deref())
        .bind(params.offset())
        .bind(params.limit())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list admin courses: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    /// Get a single course regardless of status
    pub async fn get(&self, id: Uuid) -> Result<CourseResponseDto> {
        self.fetch(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<Course>> {
        sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1"
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
