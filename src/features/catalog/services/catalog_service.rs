use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::catalog::dtos::{
    CatalogPageDto, CourseQueryParams, CourseResponseDto, PaginationMeta,
};
use crate::features::catalog::repository::{CatalogFilter, CatalogRepository};

/// Resolves catalog queries against the configured repository
pub struct CatalogService {
    repo: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    /// Resolve a category/tag/search/page/limit request to a catalog page.
    /// Out-of-range pages come back empty rather than erroring.
    pub async fn resolve(&self, params: &CourseQueryParams) -> Result<CatalogPageDto> {
        let page = params.page.max(1);
        let limit = params.limit();

        let filter = CatalogFilter {
            category: params.category.clone(),
            tag: params.tag.clone(),
            search: params.search.clone(),
            offset: params.offset(),
            limit,
        };

        let result = self.repo.query(&filter).await?;

        Ok(CatalogPageDto {
            courses: result.items.into_iter().map(Into::into).collect(),
            pagination: PaginationMeta::new(page, limit, result.total),
        })
    }

    /// Fetch a single course by id
    pub async fn get(&self, id: Uuid) -> Result<CourseResponseDto> {
        self.repo
            .find(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog::repository::FixtureCatalog;

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(FixtureCatalog::new()))
    }

    fn params(category: Option<&str>, page: i64, limit: i64) -> CourseQueryParams {
        CourseQueryParams {
            category: category.map(String::from),
            page,
            limit,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_free_category_paginates_eight_items() {
        let svc = service();

        let page = svc.resolve(&params(Some("free"), 1, 2)).await.unwrap();

        assert_eq!(page.courses.len(), 2);
        assert_eq!(page.pagination.total, 8);
        assert_eq!(page.pagination.total_pages, 4);
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.pagination.limit, 2);
    }

    #[tokio::test]
    async fn test_slice_length_formula() {
        let svc = service();
        let total: i64 = 8;
        let limit: i64 = 3;

        for page_no in 1..=4 {
            let page = svc
                .resolve(&params(Some("free"), page_no, limit))
                .await
                .unwrap();

            let expected = limit.min((total - (page_no - 1) * limit).max(0));
            assert_eq!(page.courses.len() as i64, expected, "page {}", page_no);
            assert_eq!(page.pagination.total_pages, 3);
        }
    }

    #[tokio::test]
    async fn test_out_of_range_page_is_empty_not_error() {
        let svc = service();

        let page = svc.resolve(&params(Some("design"), 99, 12)).await.unwrap();

        assert!(page.courses.is_empty());
        assert_eq!(page.pagination.total, 3);
    }

    #[tokio::test]
    async fn test_early_bird_tag_ignores_category() {
        let svc = service();

        let query = CourseQueryParams {
            category: Some("business".to_string()),
            tag: Some("early-bird".to_string()),
            ..Default::default()
        };
        let page = svc.resolve(&query).await.unwrap();

        assert_eq!(page.pagination.total, 6);
        assert!(page.courses.iter().all(|c| c.is_early_bird));
    }

    #[tokio::test]
    async fn test_get_unknown_course_is_not_found() {
        let svc = service();

        let err = svc.get(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
