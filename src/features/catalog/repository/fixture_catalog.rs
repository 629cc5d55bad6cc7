use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::catalog::fixtures;
use crate::features::catalog::models::Course;
use crate::shared::constants::EARLY_BIRD_TAG;

use super::{matches_search, CatalogFilter, CatalogPage, CatalogRepository};

/// Catalog backed by the embedded fixture sets.
///
/// Resolution order, first match wins:
/// 1. `tag == "early-bird"` selects the promotional set, whatever the category
/// 2. a known category label selects its fixture set
/// 3. no category (or "all") selects the union of every set
/// 4. any other label filters the union by equality, normally yielding nothing
pub struct FixtureCatalog;

impl FixtureCatalog {
    pub fn new() -> Self {
        Self
    }

    fn select(filter: &CatalogFilter) -> Vec<Course> {
        if filter.tag.as_deref() == Some(EARLY_BIRD_TAG) {
            return fixtures::EARLY_BIRD_COURSES.clone();
        }

        match filter.category.as_deref() {
            None | Some("all") => fixtures::all_courses(),
            Some(label) => match fixtures::category_set(label) {
                Some(set) => set.clone(),
                None => fixtures::all_courses()
                    .into_iter()
                    .filter(|c| c.category.as_deref() == Some(label))
                    .collect(),
            },
        }
    }
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogRepository for FixtureCatalog {
    async fn query(&self, filter: &CatalogFilter) -> Result<CatalogPage> {
        let mut selected = Self::select(filter);

        if let Some(term) = filter.search.as_deref() {
            selected.retain(|c| matches_search(c, term));
        }

        let total = selected.len() as i64;
        let items = selected
            .into_iter()
            .skip(filter.offset.max(0) as usize)
            .take(filter.limit.max(0) as usize)
            .collect();

        Ok(CatalogPage { items, total })
    }

    async fn find(&self, id: Uuid) -> Result<Option<Course>> {
        Ok(fixtures::all_courses().into_iter().find(|c| c.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(category: Option<&str>, tag: Option<&str>, search: Option<&str>) -> CatalogFilter {
        CatalogFilter {
            category: category.map(String::from),
            tag: tag.map(String::from),
            search: search.map(String::from),
            offset: 0,
            limit: 100,
        }
    }

    #[tokio::test]
    async fn test_early_bird_tag_wins_over_category() {
        let repo = FixtureCatalog::new();

        let page = repo
            .query(&filter(Some("programming"), Some("early-bird"), None))
            .await
            .unwrap();

        assert_eq!(page.total, 6);
        assert!(page.items.iter().all(|c| c.is_early_bird));
    }

    #[tokio::test]
    async fn test_known_category_selects_its_set() {
        let repo = FixtureCatalog::new();

        let page = repo.query(&filter(Some("free"), None, None)).await.unwrap();
        assert_eq!(page.total, 8);
        assert!(page.items.iter().all(|c| c.price == 0));

        let page = repo
            .query(&filter(Some("design"), None, None))
            .await
            .unwrap();
        assert_eq!(page.total, 3);
    }

    #[tokio::test]
    async fn test_absent_or_all_category_returns_union() {
        let repo = FixtureCatalog::new();

        let all = repo.query(&filter(None, None, None)).await.unwrap();
        let all_explicit = repo.query(&filter(Some("all"), None, None)).await.unwrap();

        // 8 free + 6 early-bird + 4 * 3 category sets
        assert_eq!(all.total, 26);
        assert_eq!(all_explicit.total, 26);
    }

    #[tokio::test]
    async fn test_unknown_category_yields_empty() {
        let repo = FixtureCatalog::new();

        let page = repo
            .query(&filter(Some("astrology"), None, None))
            .await
            .unwrap();

        assert_eq!(page.total, 0);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn test_search_narrows_selection() {
        let repo = FixtureCatalog::new();

        let page = repo
            .query(&filter(Some("programming"), None, Some("python")))
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert!(page.items[0].title.contains("Python"));
    }

    #[tokio::test]
    async fn test_search_is_idempotent() {
        let repo = FixtureCatalog::new();

        let once = repo
            .query(&filter(None, None, Some("marketing")))
            .await
            .unwrap();

        // Filtering the already-filtered result by the same term changes nothing
        let twice: Vec<_> = once
            .items
            .iter()
            .filter(|c| matches_search(c, "marketing"))
            .collect();

        assert_eq!(once.items.len(), twice.len());
    }

    #[tokio::test]
    async fn test_pagination_slice_bounds() {
        let repo = FixtureCatalog::new();

        let mut f = filter(Some("free"), None, None);
        f.limit = 2;

        // page 1
        let page = repo.query(&f).await.unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 8);

        // last partial page would be page 4 of 4; out-of-range is empty
        f.offset = 8;
        let page = repo.query(&f).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 8);
    }

    #[tokio::test]
    async fn test_find_known_and_unknown_id() {
        let repo = FixtureCatalog::new();
        let known = fixtures::FREE_COURSES[0].id;

        assert!(repo.find(known).await.unwrap().is_some());
        assert!(repo.find(Uuid::new_v4()).await.unwrap().is_none());
    }
}
