//! Content Backend Module
//!
//! Categories and posts behind the blog's public read/write surface:
//! - `domain/` - Entities and repository traits
//! - `application/` - Category and post services, list cache
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! The category list is served from a TTL cache; staleness within the
//! window is accepted by design.

pub mod application;
pub mod cache;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ContentConfig;
pub use error::{ContentError, ContentResult};
pub use infra::postgres::{PgCategoryRepository, PgPostRepository};
pub use presentation::router::content_router;
