//! In-memory fakes shared by the service tests.

use chrono::{Duration, TimeZone, Utc};
use kernel::id::{CategoryId, PostId};
use tokio::sync::Mutex;

use crate::domain::entity::{
    Category, CategoryUpdate, NewCategory, Post, PostAuthor, PostSummary,
};
use crate::domain::repository::{CategoryRepository, PostRepository};
use crate::error::{ContentError, ContentResult};

/// In-memory category repository fake
pub(crate) struct InMemoryCategories {
    pub categories: Mutex<Vec<Category>>,
}

impl InMemoryCategories {
    pub fn new() -> Self {
        Self {
            categories: Mutex::new(Vec::new()),
        }
    }

    /// Insert bypassing the service, to mutate behind the cache.
    pub async fn insert_raw(&self, name: &str, slug: &str) {
        let mut categories = self.categories.lock().await;
        let id = CategoryId::from(categories.len() as i64 + 1);
        categories.push(Category {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
        });
    }
}

impl CategoryRepository for InMemoryCategories {
    async fn list(&self) -> ContentResult<Vec<Category>> {
        Ok(self.categories.lock().await.clone())
    }

    async fn find_by_id(&self, id: CategoryId) -> ContentResult<Category> {
        self.categories
            .lock()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(ContentError::CategoryNotFound)
    }

    async fn create(&self, new_category: NewCategory) -> ContentResult<Category> {
        let mut categories = self.categories.lock().await;
        let category = Category {
            id: CategoryId::from(categories.len() as i64 + 1),
            name: new_category.name,
            slug: new_category.slug,
        };
        categories.push(category.clone());
        Ok(category)
    }

    async fn update(&self, id: CategoryId, update: CategoryUpdate) -> ContentResult<()> {
        let mut categories = self.categories.lock().await;
        let category = categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ContentError::CategoryNotFound)?;
        category.name = update.name;
        category.slug = update.slug;
        Ok(())
    }

    async fn delete(&self, id: CategoryId) -> ContentResult<()> {
        let mut categories = self.categories.lock().await;
        let before = categories.len();
        categories.retain(|c| c.id != id);
        if categories.len() == before {
            return Err(ContentError::CategoryNotFound);
        }
        Ok(())
    }
}

/// In-memory post repository fake
pub(crate) struct InMemoryPosts {
    pub posts: Vec<Post>,
}

impl InMemoryPosts {
    /// `count` posts where post `n` was updated `n` minutes after the
    /// epoch (so higher ids are newer). Even ids land in the "backend"
    /// category, odd ids in "frontend".
    pub fn with_sequential_posts(count: i64) -> Self {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let posts = (1..=count)
            .map(|n| {
                let (cat_name, cat_slug) = if n % 2 == 0 {
                    ("Backend", "backend")
                } else {
                    ("Frontend", "frontend")
                };
                Post {
                    id: PostId::from(n),
                    title: format!("Post {n}"),
                    summary: format!("Summary {n}"),
                    body: format!("Body {n}"),
                    slug: format!("post-{n}"),
                    create_date: base,
                    last_update_date: base + Duration::minutes(n),
                    category: Category {
                        id: CategoryId::from(if n % 2 == 0 { 1 } else { 2 }),
                        name: cat_name.to_string(),
                        slug: cat_slug.to_string(),
                    },
                    author: PostAuthor {
                        name: "Ana".to_string(),
                        email: "ana@example.com".to_string(),
                        slug: "ana-example-com".to_string(),
                        image: None,
                    },
                }
            })
            .collect();
        Self { posts }
    }

    fn summaries<'a>(posts: impl Iterator<Item = &'a Post>) -> Vec<PostSummary> {
        let mut summaries: Vec<PostSummary> = posts
            .map(|p| PostSummary {
                id: p.id,
                title: p.title.clone(),
                slug: p.slug.clone(),
                last_update_date: p.last_update_date,
                category: p.category.name.clone(),
                author: format!("{} ({})", p.author.name, p.author.email),
            })
            .collect();
        summaries.sort_by(|a, b| b.last_update_date.cmp(&a.last_update_date));
        summaries
    }

    fn window(summaries: Vec<PostSummary>, offset: i64, limit: i64) -> Vec<PostSummary> {
        summaries
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect()
    }
}

impl PostRepository for InMemoryPosts {
    async fn count(&self) -> ContentResult<i64> {
        Ok(self.posts.len() as i64)
    }

    async fn list_page(&self, offset: i64, limit: i64) -> ContentResult<Vec<PostSummary>> {
        Ok(Self::window(
            Self::summaries(self.posts.iter()),
            offset,
            limit,
        ))
    }

    async fn find_by_id(&self, id: PostId) -> ContentResult<Post> {
        self.posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ContentError::PostNotFound)
    }

    async fn count_by_category_slug(&self, slug: &str) -> ContentResult<i64> {
        Ok(self
            .posts
            .iter()
            .filter(|p| p.category.slug == slug)
            .count() as i64)
    }

    async fn list_page_by_category_slug(
        &self,
        slug: &str,
        offset: i64,
        limit: i64,
    ) -> ContentResult<Vec<PostSummary>> {
        let filtered = self.posts.iter().filter(|p| p.category.slug == slug);
        Ok(Self::window(Self::summaries(filtered), offset, limit))
    }
}
