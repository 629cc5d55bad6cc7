use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::admin::dtos::{
    AdminStatsDto, CategoryStatsDto, MonthlyRevenueDto, OverviewStatsDto, PopularCourseDto,
};

#[derive(Debug, FromRow)]
struct OverviewRow {
    total_courses: i64,
    total_purchases: i64,
    total_revenue: i64,
    recent_purchases: i64,
    recent_revenue: i64,
}

#[derive(Debug, FromRow)]
struct PopularCourseRow {
    id: Uuid,
    title: String,
    purchases: i64,
    revenue: i64,
    rating: f64,
}

#[derive(Debug, FromRow)]
struct CategoryStatsRow {
    category: String,
    count: i64,
    revenue: i64,
}

#[derive(Debug, FromRow)]
struct MonthlyRevenueRow {
    month: String,
    revenue: i64,
}

/// Service for the admin overview/revenue statistics
pub struct StatsService {
    pool: PgPool,
}

impl StatsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_stats(&self) -> Result<AdminStatsDto> {
        let overview = self.get_overview().await?;
        let popular_courses = self.get_popular_courses().await?;
        let category_stats = self.get_category_stats().await?;
        let monthly_revenue = self.get_monthly_revenue().await?;

        Ok(AdminStatsDto {
            overview,
            popular_courses,
            category_stats,
            monthly_revenue,
        })
    }

    /// Headline counters; revenue counts completed purchases only
    async fn get_overview(&self) -> Result<OverviewStatsDto> {
        let row = sqlx::query_as::<_, OverviewRow>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM courses) AS total_courses,
                (SELECT COUNT(*) FROM purchases) AS total_purchases,
                (SELECT COALESCE(SUM(amount), 0)::BIGINT FROM purchases
                 WHERE status = 'completed') AS total_revenue,
                (SELECT COUNT(*) FROM purchases
                 WHERE created_at >= NOW() - INTERVAL '7 days') AS recent_purchases,
                (SELECT COALESCE(SUM(amount), 0)::BIGINT FROM purchases
                 WHERE status = 'completed'
                   AND created_at >= NOW() - INTERVAL '7 days') AS recent_revenue
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get overview stats: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(OverviewStatsDto {
            total_courses: row.total_courses,
            total_purchases: row.total_purchases,
            total_revenue: row.total_revenue,
            recent_purchases: row.recent_purchases,
            recent_revenue: row.recent_revenue,
        })
    }

    /// Top 5 courses by purchase count
    async fn get_popular_courses(&self) -> Result<Vec<PopularCourseDto>> {
        let rows = sqlx::query_as::<_, PopularCourseRow>(
            r#"
            SELECT
                c.id,
                c.title,
                COUNT(p.id) AS purchases,
                COALESCE(SUM(p.amount) FILTER (WHERE p.status = 'completed'), 0)::BIGINT AS revenue,
                c.rating
            FROM courses c
            LEFT JOIN purchases p ON p.course_id = c.id
            GROUP BY c.id, c.title, c.rating
            ORDER BY COUNT(p.id) DESC, c.title ASC
            LIMIT 5
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get popular courses: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows
            .into_iter()
            .map(|r| PopularCourseDto {
                id: r.id,
                title: r.title,
                purchases: r.purchases,
                revenue: r.revenue,
                rating: r.rating,
            })
            .collect())
    }

    /// Course count and completed revenue per category label
    async fn get_category_stats(&self) -> Result<Vec<CategoryStatsDto>> {
        let rows = sqlx::query_as::<_, CategoryStatsRow>(
            r#"
            SELECT
                COALESCE(c.category, 'uncategorized') AS category,
                COUNT(DISTINCT c.id) AS count,
                COALESCE(SUM(p.amount) FILTER (WHERE p.status = 'completed'), 0)::BIGINT AS revenue
            FROM courses c
            LEFT JOIN purchases p ON p.course_id = c.id
            GROUP BY c.category
            ORDER BY COUNT(DISTINCT c.id) DESC, category ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category stats: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows
            .into_iter()
            .map(|r| CategoryStatsDto {
                category: r.category,
                count: r.count,
                revenue: r.revenue,
            })
            .collect())
    }

    /// Completed revenue per calendar month for the trailing 12 months
    async fn get_monthly_revenue(&self) -> Result<Vec<MonthlyRevenueDto>> {
        let rows = sqlx::query_as::<_, MonthlyRevenueRow>(
            r#"
            SELECT
                to_char(date_trunc('month', created_at), 'YYYY-MM') AS month,
                COALESCE(SUM(amount), 0)::BIGINT AS revenue
            FROM purchases
            WHERE status = 'completed'
              AND created_at >= date_trunc('month', NOW()) - INTERVAL '11 months'
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get monthly revenue: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows
            .into_iter()
            .map(|r| MonthlyRevenueDto {
                month: r.month,
                revenue: r.revenue,
            })
            .collect())
    }
}
