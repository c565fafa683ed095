//! Account Router

use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use platform::mailer::Mailer;
use platform::storage::ImageStore;

use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AccountAppState};
use crate::presentation::middleware::{AuthMiddlewareState, authenticate, require_admin};

/// Build the account routes.
///
/// Login and registration are open; image upload requires a verified
/// bearer token carrying the admin role.
pub fn account_router<R, M, S>(state: AccountAppState<R, M, S>) -> Router
where
    R: UserRepository + Send + Sync + 'static,
    M: Mailer + Send + Sync + 'static,
    S: ImageStore + Send + Sync + 'static,
{
    let auth_state = AuthMiddlewareState {
        tokens: Arc::clone(&state.tokens),
    };

    // Middleware layers run outside-in: token verification first,
    // role check second.
    let protected = Router::new()
        .route("/accounts/upload-image", post(handlers::upload_image::<R, M, S>))
        .layer(axum::middleware::from_fn(require_admin))
        .layer(axum::middleware::from_fn_with_state(auth_state, authenticate));

    Router::new()
        .route("/accounts/login", post(handlers::login::<R, M, S>))
        .route("/accounts", post(handlers::register::<R, M, S>))
        .merge(protected)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        InMemoryUsers, NullMailer, NullStore, seed_admin, seeded_repo, token_issuer,
    };
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn test_router() -> (Router, Arc<InMemoryUsers>, Arc<crate::TokenIssuer>) {
        let repo = seeded_repo("ana@example.com", "correct horse").await;
        seed_admin(&repo, "root@example.com", "hunter22").await;
        let tokens = token_issuer();
        let state = AccountAppState {
            repository: Arc::clone(&repo),
            mailer: Arc::new(NullMailer),
            store: Arc::new(NullStore),
            tokens: Arc::clone(&tokens),
        };
        (account_router(state), repo, tokens)
    }

    fn json_post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn login_token(router: &Router, email: &str, password: &str) -> String {
        let response = router
            .clone()
            .oneshot(json_post(
                "/accounts/login",
                serde_json::json!({ "email": email, "password": password }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        body["payload"]["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn login_success_envelope() {
        let (router, _, _) = test_router().await;

        let response = router
            .oneshot(json_post(
                "/accounts/login",
                serde_json::json!({ "email": "ana@example.com", "password": "correct horse" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["payload"]["email"], "ana@example.com");
        assert_eq!(body["payload"]["name"], "Ana");
        assert!(body["payload"]["token"].as_str().is_some());
        assert_eq!(body["errors"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn login_failure_shapes_are_indistinguishable() {
        let (router, _, _) = test_router().await;

        let unknown = router
            .clone()
            .oneshot(json_post(
                "/accounts/login",
                serde_json::json!({ "email": "nobody@example.com", "password": "correct horse" }),
            ))
            .await
            .unwrap();
        let wrong = router
            .oneshot(json_post(
                "/accounts/login",
                serde_json::json!({ "email": "ana@example.com", "password": "wrong" }),
            ))
            .await
            .unwrap();

        assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

        let unknown_body = body_json(unknown).await;
        let wrong_body = body_json(wrong).await;
        assert_eq!(unknown_body, wrong_body);
        assert_eq!(unknown_body["payload"], Value::Null);
        assert_eq!(unknown_body["errors"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn register_answers_created_with_public_fields() {
        let (router, _, _) = test_router().await;

        let response = router
            .oneshot(json_post(
                "/accounts",
                serde_json::json!({
                    "name": "New User",
                    "email": "new.user@example.com",
                    "password": "battery staple"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["payload"]["name"], "New User");
        assert_eq!(body["payload"]["roles"], serde_json::json!(["user"]));
        assert_eq!(body["payload"]["image"], Value::Null);
        assert!(body["payload"].get("password").is_none());
    }

    #[tokio::test]
    async fn duplicate_registration_answers_bad_request() {
        let (router, _, _) = test_router().await;

        let response = router
            .oneshot(json_post(
                "/accounts",
                serde_json::json!({
                    "name": "Ana Again",
                    "email": "ana@example.com",
                    "password": "battery staple"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["errors"][0].as_str().unwrap().contains("already in use"));
    }

    #[tokio::test]
    async fn upload_image_requires_a_token() {
        let (router, _, _) = test_router().await;

        let response = router
            .oneshot(json_post(
                "/accounts/upload-image",
                serde_json::json!({ "base64Image": "aGk=" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn upload_image_requires_admin_role() {
        let (router, _, _) = test_router().await;
        let token = login_token(&router, "ana@example.com", "correct horse").await;

        let mut request = json_post(
            "/accounts/upload-image",
            serde_json::json!({ "base64Image": "aGk=" }),
        );
        request.headers_mut().insert(
            header::AUTHORIZATION,
            format!("Bearer {token}").parse().unwrap(),
        );

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn admin_can_upload_image() {
        let (router, repo, _) = test_router().await;
        let token = login_token(&router, "root@example.com", "hunter22").await;

        let mut request = json_post(
            "/accounts/upload-image",
            serde_json::json!({ "base64Image": "aGk=" }),
        );
        request.headers_mut().insert(
            header::AUTHORIZATION,
            format!("Bearer {token}").parse().unwrap(),
        );

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let email = crate::domain::value_object::email::Email::new("root@example.com").unwrap();
        let user = {
            use crate::domain::repository::UserRepository;
            repo.find_by_email(&email).await.unwrap().unwrap()
        };
        assert!(user.image.unwrap().ends_with(".jpg"));
    }

    #[tokio::test]
    async fn garbage_token_rejected() {
        let (router, _, _) = test_router().await;

        let mut request = json_post(
            "/accounts/upload-image",
            serde_json::json!({ "base64Image": "aGk=" }),
        );
        request.headers_mut().insert(
            header::AUTHORIZATION,
            "Bearer not.a.token".parse().unwrap(),
        );

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
