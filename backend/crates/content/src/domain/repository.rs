//! Repository Traits

use kernel::id::{CategoryId, PostId};

use crate::domain::entity::{Category, CategoryUpdate, NewCategory, Post, PostSummary};
use crate::error::ContentResult;

/// Category persistence operations
#[trait_variant::make(CategoryRepository: Send)]
pub trait LocalCategoryRepository {
    async fn list(&self) -> ContentResult<Vec<Category>>;

    /// Returns [`crate::error::ContentError::CategoryNotFound`] for an
    /// unknown id.
    async fn find_by_id(&self, id: CategoryId) -> ContentResult<Category>;

    async fn create(&self, new_category: NewCategory) -> ContentResult<Category>;

    async fn update(&self, id: CategoryId, update: CategoryUpdate) -> ContentResult<()>;

    async fn delete(&self, id: CategoryId) -> ContentResult<()>;
}

/// Post persistence operations (read-only surface)
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    async fn count(&self) -> ContentResult<i64>;

    /// One page of summaries ordered by last update, newest first.
    async fn list_page(&self, offset: i64, limit: i64) -> ContentResult<Vec<PostSummary>>;

    /// Returns [`crate::error::ContentError::PostNotFound`] for an
    /// unknown id.
    async fn find_by_id(&self, id: PostId) -> ContentResult<Post>;

    async fn count_by_category_slug(&self, slug: &str) -> ContentResult<i64>;

    async fn list_page_by_category_slug(
        &self,
        slug: &str,
        offset: i64,
        limit: i64,
    ) -> ContentResult<Vec<PostSummary>>;
}
