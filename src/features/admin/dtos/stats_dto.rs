use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Headline counters for the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStatsDto {
    pub total_courses: i64,
    pub total_purchases: i64,
    /// Sum of completed purchase amounts
    pub total_revenue: i64,
    pub recent_purchases: i64,
    pub recent_revenue: i64,
}

/// Top course by purchase count
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PopularCourseDto {
    pub id: Uuid,
    pub title: String,
    pub purchases: i64,
    pub revenue: i64,
    pub rating: f64,
}

/// Per-category course count and completed revenue
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStatsDto {
    pub category: String,
    pub count: i64,
    pub revenue: i64,
}

/// Completed revenue for one calendar month
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenueDto {
    /// Month in YYYY-MM form
    pub month: String,
    pub revenue: i64,
}

/// Full admin statistics payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatsDto {
    pub overview: OverviewStatsDto,
    pub popular_courses: Vec<PopularCourseDto>,
    pub category_stats: Vec<CategoryStatsDto>,
    pub monthly_revenue: Vec<MonthlyRevenueDto>,
}
