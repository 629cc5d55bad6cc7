//! Public course catalog: listing with category/tag/search filters and
//! pagination, plus single-course lookup.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/courses` | No | Paginated, filterable course listing |
//! | GET | `/api/courses/{id}` | No | Single course by id |

pub mod dtos;
pub mod fixtures;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{CatalogRepository, FixtureCatalog, PgCatalog};
pub use services::CatalogService;
