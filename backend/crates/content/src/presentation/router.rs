//! Content Router

use axum::Router;
use axum::routing::get;

use crate::domain::repository::{CategoryRepository, PostRepository};
use crate::presentation::handlers::{self, ContentAppState};

/// Build the category and post routes. All content routes are public.
pub fn content_router<C, P>(state: ContentAppState<C, P>) -> Router
where
    C: CategoryRepository + Send + Sync + 'static,
    P: PostRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/categories",
            get(handlers::list_categories::<C, P>).post(handlers::create_category::<C, P>),
        )
        .route(
            "/categories/{id}",
            get(handlers::get_category::<C, P>)
                .put(handlers::update_category::<C, P>)
                .delete(handlers::delete_category::<C, P>),
        )
        .route("/posts", get(handlers::list_posts::<C, P>))
        .route("/posts/{id}", get(handlers::get_post::<C, P>))
        .route(
            "/posts/category/{slug}",
            get(handlers::list_posts_by_category::<C, P>),
        )
        .with_state(state)
}
