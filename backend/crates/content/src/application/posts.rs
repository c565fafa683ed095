//! Post Service
//!
//! Read-only post listing and retrieval. Listings are ordered by last
//! update (newest first) before the paging window is applied.

use std::sync::Arc;

use kernel::id::PostId;

use crate::application::config::ContentConfig;
use crate::domain::entity::{Post, PostPage};
use crate::domain::repository::PostRepository;
use crate::error::{ContentError, ContentResult};

/// Paging window, normalized from raw query parameters.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl PageRequest {
    /// Normalize raw parameters: page defaults to 0, perPage to the
    /// configured default; negative values are rejected.
    pub fn new(
        page: Option<i64>,
        per_page: Option<i64>,
        config: &ContentConfig,
    ) -> ContentResult<Self> {
        let page = page.unwrap_or(0);
        let per_page = per_page.unwrap_or(config.default_per_page);

        if page < 0 || per_page <= 0 {
            return Err(ContentError::Validation(vec![
                "The paging parameters are invalid.".to_string(),
            ]));
        }

        Ok(Self { page, per_page })
    }

    fn offset(&self) -> i64 {
        self.page * self.per_page
    }
}

/// Serves post listings and single-post reads.
pub struct PostService<R> {
    repository: Arc<R>,
}

impl<R: PostRepository> PostService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// One page of all posts.
    pub async fn list(&self, request: PageRequest) -> ContentResult<PostPage> {
        let total = self.repository.count().await?;
        let posts = self
            .repository
            .list_page(request.offset(), request.per_page)
            .await?;

        Ok(PostPage {
            total,
            page: request.page,
            per_page: request.per_page,
            posts,
        })
    }

    /// Full post with author and category.
    pub async fn get(&self, id: PostId) -> ContentResult<Post> {
        self.repository.find_by_id(id).await
    }

    /// One page of posts in the given category. The total counts only
    /// that category's posts.
    pub async fn list_by_category(
        &self,
        slug: &str,
        request: PageRequest,
    ) -> ContentResult<PostPage> {
        let total = self.repository.count_by_category_slug(slug).await?;
        let posts = self
            .repository
            .list_page_by_category_slug(slug, request.offset(), request.per_page)
            .await?;

        Ok(PostPage {
            total,
            page: request.page,
            per_page: request.per_page,
            posts,
        })
    }
}
