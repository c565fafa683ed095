//! Category Service
//!
//! CRUD orchestration over the category repository. The list query is
//! served through a TTL cache under one fixed key; the query takes no
//! parameters, so the fixed key is equivalent to a parameter-derived
//! one. Writes do not invalidate the cache, reads may be stale until
//! the window expires.

use std::sync::Arc;

use kernel::id::CategoryId;

use crate::application::config::ContentConfig;
use crate::cache::TtlCache;
use crate::domain::entity::{Category, CategoryUpdate, NewCategory};
use crate::domain::repository::CategoryRepository;
use crate::error::{ContentError, ContentResult};

/// Cache key for the full category list
const CATEGORIES_CACHE_KEY: &str = "categories";

/// Maximum category name length
const NAME_MAX_LENGTH: usize = 80;

fn validate_name(name: &str) -> ContentResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ContentError::Validation(vec![
            "The name is required.".to_string(),
        ]));
    }
    if name.chars().count() > NAME_MAX_LENGTH {
        return Err(ContentError::Validation(vec![format!(
            "The name must be at most {} characters.",
            NAME_MAX_LENGTH
        )]));
    }
    Ok(name.to_string())
}

/// Slug defaults to the lower-cased name when the request omits it.
fn resolve_slug(slug: Option<String>, name: &str) -> String {
    match slug {
        Some(slug) if !slug.trim().is_empty() => slug.trim().to_lowercase(),
        _ => name.to_lowercase(),
    }
}

/// Orchestrates category reads and writes.
pub struct CategoryService<R> {
    repository: Arc<R>,
    cache: TtlCache<Vec<Category>>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: Arc<R>, config: &ContentConfig) -> Self {
        Self {
            repository,
            cache: TtlCache::new(config.cache_ttl),
        }
    }

    /// List all categories, served from the cache when warm.
    pub async fn list(&self) -> ContentResult<Vec<Category>> {
        if let Some(categories) = self.cache.get(CATEGORIES_CACHE_KEY).await {
            return Ok(categories);
        }

        let categories = self.repository.list().await?;
        self.cache.put(CATEGORIES_CACHE_KEY, categories.clone()).await;

        Ok(categories)
    }

    pub async fn find(&self, id: CategoryId) -> ContentResult<Category> {
        self.repository.find_by_id(id).await
    }

    pub async fn create(&self, name: &str, slug: Option<String>) -> ContentResult<Category> {
        let name = validate_name(name)?;
        let slug = resolve_slug(slug, &name);

        let category = self.repository.create(NewCategory { name, slug }).await?;

        tracing::info!(category_id = %category.id, "Category created");

        Ok(category)
    }

    pub async fn update(
        &self,
        id: CategoryId,
        name: &str,
        slug: Option<String>,
    ) -> ContentResult<()> {
        let name = validate_name(name)?;
        let slug = resolve_slug(slug, &name);

        self.repository
            .update(id, CategoryUpdate { name, slug })
            .await?;

        tracing::info!(category_id = %id, "Category updated");

        Ok(())
    }

    pub async fn delete(&self, id: CategoryId) -> ContentResult<()> {
        self.repository.delete(id).await?;

        tracing::info!(category_id = %id, "Category removed");

        Ok(())
    }
}
