use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::catalog::models::Course;
use crate::features::purchases::dtos::PurchaseResponseDto;
use crate::features::purchases::models::Purchase;

const PURCHASE_COLUMNS: &str = "id, user_id, course_id, amount, status, payment_method, \
     refund_reason, created_at, updated_at";

const COURSE_COLUMNS: &str = "id, title, description, instructor, category, status, published, \
     price, original_price, duration, level, is_featured, tags, thumbnail_url, \
     detail_image_url, is_early_bird, discount_percent, student_count, rating, \
     review_count, created_at, updated_at";

/// Service for purchase recording, history, and refunds
pub struct PurchaseService {
    pool: PgPool,
}

impl PurchaseService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a purchase for the authenticated user.
    ///
    /// The course must exist and the user must not already hold a completed
    /// purchase for it. The check-then-insert pair is not transactional; the
    /// partial unique index backs it, and a violation surfaces as the same
    /// conflict.
    pub async fn purchase(&self, user_id: &str, course_id: Uuid) -> Result<PurchaseResponseDto> {
        let course = self
            .fetch_course(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        let already_purchased: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM purchases
                WHERE user_id = $1 AND course_id = $2 AND status = 'completed'
            )
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check existing purchase: {:?}", e);
            AppError::Database(e)
        })?;

        if already_purchased {
            return Err(AppError::Conflict(
                "You have already purchased this course".to_string(),
            ));
        }

        let purchase = sqlx::query_as::<_, Purchase>(&format!(
            r#"
            INSERT INTO purchases (user_id, course_id, amount, status)
            VALUES ($1, $2, $3, 'completed')
            RETURNING {PURCHASE_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(course_id)
        .bind(course.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // The unique partial index closes the check-then-insert race
            if e.as_database_error()
                .and_then(|db| db.code())
                .is_some_and(|code| code == "23505")
            {
                AppError::Conflict("You have already purchased this course".to_string())
            } else {
                tracing::error!("Failed to insert purchase: {:?}", e);
                AppError::Database(e)
            }
        })?;

        // Initialize the progress record for the pair; refunds never undo it
        sqlx::query(
            r#"
            INSERT INTO course_progress (user_id, course_id, progress_percent)
            VALUES ($1, $2, 0)
            ON CONFLICT (user_id, course_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to initialize course progress: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Purchase recorded: user={}, course={}, amount={}",
            user_id,
            course_id,
            course.price
        );

        Ok(PurchaseResponseDto::from_purchase(purchase, Some(course)))
    }

    /// List the user's completed purchases, newest first
    pub async fn list(&self, user_id: &str) -> Result<Vec<PurchaseResponseDto>> {
        let purchases = sqlx::query_as::<_, Purchase>(&format!(
            r#"
            SELECT {PURCHASE_COLUMNS}
            FROM purchases
            WHERE user_id = $1 AND status = 'completed'
            ORDER BY created_at DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list purchases: {:?}", e);
            AppError::Database(e)
        })?;

        let mut items = Vec::with_capacity(purchases.len());
        for purchase in purchases {
            let course = self.fetch_course(purchase.course_id).await?;
            items.push(PurchaseResponseDto::from_purchase(purchase, course));
        }

        Ok(items)
    }

    /// Refund a completed purchase with a required reason (admin action)
    pub async fn refund(&self, purchase_id: Uuid, reason: &str) -> Result<PurchaseResponseDto> {
        if reason.trim().is_empty() {
            return Err(AppError::Validation(
                "Refund reason is required".to_string(),
            ));
        }

        let purchase = sqlx::query_as::<_, Purchase>(&format!(
            "SELECT {PURCHASE_COLUMNS} FROM purchases WHERE id = $1"
        ))
        .bind(purchase_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch purchase {}: {:?}", purchase_id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Purchase not found".to_string()))?;

        if !purchase.status.can_refund() {
            return Err(AppError::Conflict(format!(
                "Purchase with status '{}' cannot be refunded",
                purchase.status
            )));
        }

        let refunded = sqlx::query_as::<_, Purchase>(&format!(
            r#"
            UPDATE purchases
            SET status = 'refunded', refund_reason = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {PURCHASE_COLUMNS}
            "#
        ))
        .bind(purchase_id)
        .bind(reason)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to refund purchase {}: {:?}", purchase_id, e);
            AppError::Database(e)
        })?;

        tracing::info!("Purchase refunded: id={}, reason={}", purchase_id, reason);

        let course = self.fetch_course(refunded.course_id).await?;
        Ok(PurchaseResponseDto::from_purchase(refunded, course))
    }

    /// Course lookup without the published-only restriction: purchases may
    /// reference drafts or archived courses
    async fn fetch_course(&self, course_id: Uuid) -> Result<Option<Course>> {
        sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1"
        ))
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch course {}: {:?}", course_id, e);
            AppError::Database(e)
        })
    }
}
