//! Admin back office: course CRUD, the back-office course list, and
//! overview/revenue statistics.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/admin/courses` | Admin | Course list (all statuses) |
//! | POST | `/api/admin/courses` | Admin | Create a course |
//! | GET | `/api/admin/courses/{id}` | Admin | Single course |
//! | PUT | `/api/admin/courses/{id}` | Admin | Sparse-patch update |
//! | DELETE | `/api/admin/courses/{id}` | Admin | Delete (restricted while purchased) |
//! | GET | `/api/admin/stats` | Admin | Overview and revenue statistics |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::{CourseAdminService, StatsService};
