//! PostgreSQL Content Repositories

use chrono::{DateTime, Utc};
use kernel::id::{CategoryId, PostId};
use sqlx::PgPool;

use crate::domain::entity::{
    Category, CategoryUpdate, NewCategory, Post, PostAuthor, PostSummary,
};
use crate::domain::repository::{CategoryRepository, PostRepository};
use crate::error::{ContentError, ContentResult};

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: CategoryId::from(row.id),
            name: row.name,
            slug: row.slug,
        }
    }
}

/// PostgreSQL-backed category repository
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CategoryRepository for PgCategoryRepository {
    async fn list(&self) -> ContentResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, slug FROM categories ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_by_id(&self, id: CategoryId) -> ContentResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, slug FROM categories WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Category::from).ok_or(ContentError::CategoryNotFound)
    }

    async fn create(&self, new_category: NewCategory) -> ContentResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            INSERT INTO categories (name, slug)
            VALUES ($1, $2)
            RETURNING id, name, slug
            "#,
        )
        .bind(&new_category.name)
        .bind(&new_category.slug)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: CategoryId, update: CategoryUpdate) -> ContentResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE categories SET name = $2, slug = $3 WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .bind(&update.name)
        .bind(&update.slug)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ContentError::CategoryNotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: CategoryId) -> ContentResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM categories WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ContentError::CategoryNotFound);
        }

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct PostSummaryRow {
    id: i64,
    title: String,
    slug: String,
    last_update_date: DateTime<Utc>,
    category_name: String,
    author_name: String,
    author_email: String,
}

impl From<PostSummaryRow> for PostSummary {
    fn from(row: PostSummaryRow) -> Self {
        PostSummary {
            id: PostId::from(row.id),
            title: row.title,
            slug: row.slug,
            last_update_date: row.last_update_date,
            category: row.category_name,
            author: format!("{} ({})", row.author_name, row.author_email),
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    summary: String,
    body: String,
    slug: String,
    create_date: DateTime<Utc>,
    last_update_date: DateTime<Utc>,
    category_id: i64,
    category_name: String,
    category_slug: String,
    author_name: String,
    author_email: String,
    author_slug: String,
    author_image: Option<String>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: PostId::from(row.id),
            title: row.title,
            summary: row.summary,
            body: row.body,
            slug: row.slug,
            create_date: row.create_date,
            last_update_date: row.last_update_date,
            category: Category {
                id: CategoryId::from(row.category_id),
                name: row.category_name,
                slug: row.category_slug,
            },
            author: PostAuthor {
                name: row.author_name,
                email: row.author_email,
                slug: row.author_slug,
                image: row.author_image,
            },
        }
    }
}

/// PostgreSQL-backed post repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostRepository for PgPostRepository {
    async fn count(&self) -> ContentResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn list_page(&self, offset: i64, limit: i64) -> ContentResult<Vec<PostSummary>> {
        let rows = sqlx::query_as::<_, PostSummaryRow>(
            r#"
            SELECT p.id, p.title, p.slug, p.last_update_date,
                   c.name AS category_name,
                   u.name AS author_name, u.email AS author_email
            FROM posts p
            INNER JOIN categories c ON c.id = p.category_id
            INNER JOIN users u ON u.id = p.author_id
            ORDER BY p.last_update_date DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostSummary::from).collect())
    }

    async fn find_by_id(&self, id: PostId) -> ContentResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT p.id, p.title, p.summary, p.body, p.slug,
                   p.create_date, p.last_update_date,
                   c.id AS category_id, c.name AS category_name, c.slug AS category_slug,
                   u.name AS author_name, u.email AS author_email,
                   u.slug AS author_slug, u.image AS author_image
            FROM posts p
            INNER JOIN categories c ON c.id = p.category_id
            INNER JOIN users u ON u.id = p.author_id
            WHERE p.id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Post::from).ok_or(ContentError::PostNotFound)
    }

    async fn count_by_category_slug(&self, slug: &str) -> ContentResult<i64> {
        let (count,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM posts p
            INNER JOIN categories c ON c.id = p.category_id
            WHERE c.slug = $1
            "#,
        )
        .bind(slug)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn list_page_by_category_slug(
        &self,
        slug: &str,
        offset: i64,
        limit: i64,
    ) -> ContentResult<Vec<PostSummary>> {
        let rows = sqlx::query_as::<_, PostSummaryRow>(
            r#"
            SELECT p.id, p.title, p.slug, p.last_update_date,
                   c.name AS category_name,
                   u.name AS author_name, u.email AS author_email
            FROM posts p
            INNER JOIN categories c ON c.id = p.category_id
            INNER JOIN users u ON u.id = p.author_id
            WHERE c.slug = $1
            ORDER BY p.last_update_date DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(slug)
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostSummary::from).collect())
    }
}
