//! Catalog data access behind a capability trait.
//!
//! Two implementations exist: the in-memory fixture catalog (embedded sample
//! sets) and the live PostgreSQL catalog. `CatalogConfig` decides which one
//! the service is built with.

mod fixture_catalog;
mod pg_catalog;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::catalog::models::Course;

pub use fixture_catalog::FixtureCatalog;
pub use pg_catalog::PgCatalog;

/// Filter for one catalog query, already normalized by the service
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub category: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
    pub offset: i64,
    pub limit: i64,
}

/// One page of matching courses plus the pre-pagination total
#[derive(Debug, Clone)]
pub struct CatalogPage {
    pub items: Vec<Course>,
    pub total: i64,
}

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Resolve a filter to a paginated slice and its total
    async fn query(&self, filter: &CatalogFilter) -> Result<CatalogPage>;

    /// Look up a single course by id
    async fn find(&self, id: Uuid) -> Result<Option<Course>>;
}

/// Case-insensitive substring match on title or description, shared by the
/// fixture catalog and the tests
pub(crate) fn matches_search(course: &Course, term: &str) -> bool {
    let term = term.to_lowercase();
    course.title.to_lowercase().contains(&term)
        || course.description.to_lowercase().contains(&term)
}
