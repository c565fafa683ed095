//! Content Entities

use chrono::{DateTime, Utc};
use kernel::id::{CategoryId, PostId};
use serde::Serialize;

/// A blog category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
}

/// Data required to persist a new category
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
}

/// Changes applied to an existing category
#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub name: String,
    pub slug: String,
}

/// A post row as shown in paginated listings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: PostId,
    pub title: String,
    pub slug: String,
    pub last_update_date: DateTime<Utc>,
    /// Category name
    pub category: String,
    /// Formatted as "Name (email)"
    pub author: String,
}

/// Author fields exposed on a full post
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    pub name: String,
    pub email: String,
    pub slug: String,
    pub image: Option<String>,
}

/// A full post with its author and category
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub slug: String,
    pub create_date: DateTime<Utc>,
    pub last_update_date: DateTime<Utc>,
    pub category: Category,
    pub author: PostAuthor,
}

/// One page of post summaries plus the paging window that produced it
#[derive(Debug, Clone)]
pub struct PostPage {
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub posts: Vec<PostSummary>,
}
