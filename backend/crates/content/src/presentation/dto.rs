//! Content DTOs

use serde::{Deserialize, Serialize};

use crate::domain::entity::{PostPage, PostSummary};

/// POST /categories request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
    /// Defaults to the lower-cased name when absent
    pub slug: Option<String>,
}

/// PUT /categories/{id} request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    pub name: String,
    pub slug: Option<String>,
}

/// Paging query parameters (`?page=0&perPage=25`)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Paginated post listing payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPageResponse {
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub posts: Vec<PostSummary>,
}

impl From<PostPage> for PostPageResponse {
    fn from(page: PostPage) -> Self {
        Self {
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            posts: page.posts,
        }
    }
}
