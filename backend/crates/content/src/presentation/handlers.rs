//! Content HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::envelope::Envelope;
use kernel::id::{CategoryId, PostId};

use crate::application::categories::CategoryService;
use crate::application::config::ContentConfig;
use crate::application::posts::{PageRequest, PostService};
use crate::domain::repository::{CategoryRepository, PostRepository};
use crate::error::ContentError;
use crate::presentation::dto::{
    CreateCategoryRequest, PageQuery, PostPageResponse, UpdateCategoryRequest,
};

/// Shared state for the content routes
pub struct ContentAppState<C, P> {
    pub categories: Arc<CategoryService<C>>,
    pub posts: Arc<PostService<P>>,
    pub config: ContentConfig,
}

// Manual impl: a derive would require C: Clone etc.
impl<C, P> Clone for ContentAppState<C, P> {
    fn clone(&self) -> Self {
        Self {
            categories: Arc::clone(&self.categories),
            posts: Arc::clone(&self.posts),
            config: self.config.clone(),
        }
    }
}

/// GET /categories
pub async fn list_categories<C, P>(
    State(state): State<ContentAppState<C, P>>,
) -> Result<impl IntoResponse, ContentError>
where
    C: CategoryRepository + Send + Sync + 'static,
{
    let categories = state.categories.list().await?;
    Ok(Json(Envelope::success(categories)))
}

/// GET /categories/{id}
pub async fn get_category<C, P>(
    State(state): State<ContentAppState<C, P>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ContentError>
where
    C: CategoryRepository + Send + Sync + 'static,
{
    let category = state.categories.find(CategoryId::from(id)).await?;
    Ok(Json(Envelope::success(category)))
}

/// POST /categories
pub async fn create_category<C, P>(
    State(state): State<ContentAppState<C, P>>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, ContentError>
where
    C: CategoryRepository + Send + Sync + 'static,
{
    let category = state.categories.create(&req.name, req.slug).await?;
    Ok((StatusCode::CREATED, Json(Envelope::success(category))))
}

/// PUT /categories/{id}
pub async fn update_category<C, P>(
    State(state): State<ContentAppState<C, P>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCategoryRequest>,
) -> Result<StatusCode, ContentError>
where
    C: CategoryRepository + Send + Sync + 'static,
{
    state
        .categories
        .update(CategoryId::from(id), &req.name, req.slug)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /categories/{id}
pub async fn delete_category<C, P>(
    State(state): State<ContentAppState<C, P>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ContentError>
where
    C: CategoryRepository + Send + Sync + 'static,
{
    state.categories.delete(CategoryId::from(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /posts
pub async fn list_posts<C, P>(
    State(state): State<ContentAppState<C, P>>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, ContentError>
where
    P: PostRepository + Send + Sync + 'static,
{
    let request = PageRequest::new(query.page, query.per_page, &state.config)?;
    let page = state.posts.list(request).await?;
    Ok(Json(Envelope::success(PostPageResponse::from(page))))
}

/// GET /posts/{id}
pub async fn get_post<C, P>(
    State(state): State<ContentAppState<C, P>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ContentError>
where
    P: PostRepository + Send + Sync + 'static,
{
    let post = state.posts.get(PostId::from(id)).await?;
    Ok(Json(Envelope::success(post)))
}

/// GET /posts/category/{slug}
pub async fn list_posts_by_category<C, P>(
    State(state): State<ContentAppState<C, P>>,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, ContentError>
where
    P: PostRepository + Send + Sync + 'static,
{
    let request = PageRequest::new(query.page, query.per_page, &state.config)?;
    let page = state.posts.list_by_category(&slug, request).await?;
    Ok(Json(Envelope::success(PostPageResponse::from(page))))
}
