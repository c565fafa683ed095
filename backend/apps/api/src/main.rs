//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use the flow crates' error types.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use auth::presentation::handlers::AccountAppState;
use auth::{AuthConfig, PgUserRepository, TokenIssuer, account_router};
use axum::{
    Router, http,
    http::{Method, header},
    routing::get,
};
use content::application::categories::CategoryService;
use content::application::posts::PostService;
use content::presentation::handlers::ContentAppState;
use content::{ContentConfig, PgCategoryRepository, PgPostRepository, content_router};
use kernel::error::app_error::AppError;
use platform::api_key::{ApiKeyConfig, require_api_key};
use platform::mailer::{SmtpConfig, SmtpMailer};
use platform::storage::FsImageStore;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Health-check handler, gated by the API key middleware.
async fn health() -> &'static str {
    "Server ok!"
}

/// Unknown routes answer the same envelope shape as everything else.
async fn fallback() -> AppError {
    AppError::not_found("The requested resource was not found.")
}

fn smtp_config_from_env() -> SmtpConfig {
    let defaults = SmtpConfig::default();
    SmtpConfig {
        host: env::var("SMTP_HOST").unwrap_or(defaults.host),
        port: env::var("SMTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port),
        user_name: env::var("SMTP_USERNAME").ok(),
        password: env::var("SMTP_PASSWORD").ok(),
        from_name: env::var("SMTP_FROM_NAME").unwrap_or(defaults.from_name),
        from_email: env::var("SMTP_FROM_EMAIL").unwrap_or(defaults.from_email),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,content=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Auth configuration
    let auth_config = if cfg!(debug_assertions) {
        env::var("JWT_SECRET")
            .map(AuthConfig::new)
            .unwrap_or_else(|_| AuthConfig::development())
    } else {
        AuthConfig::new(env::var("JWT_SECRET").expect("JWT_SECRET must be set in production"))
    };
    let tokens = Arc::new(TokenIssuer::new(&auth_config));

    // Outbound mail
    let mailer = Arc::new(SmtpMailer::new(&smtp_config_from_env())?);

    // Image storage
    let image_dir = env::var("IMAGE_DIR").unwrap_or_else(|_| "./uploads".to_string());
    let public_base_url =
        env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:31113/images".to_string());
    let store = Arc::new(FsImageStore::new(image_dir, public_base_url));

    // Account routes state
    let account_state = AccountAppState {
        repository: Arc::new(PgUserRepository::new(pool.clone())),
        mailer,
        store,
        tokens,
    };

    // Content routes state
    let content_config = ContentConfig::default();
    let content_state = ContentAppState {
        categories: Arc::new(CategoryService::new(
            Arc::new(PgCategoryRepository::new(pool.clone())),
            &content_config,
        )),
        posts: Arc::new(PostService::new(Arc::new(PgPostRepository::new(
            pool.clone(),
        )))),
        config: content_config,
    };

    // Health-check gate
    let api_key_config = ApiKeyConfig {
        header_name: env::var("API_KEY_NAME").unwrap_or_else(|_| "Api_key".to_string()),
        key: env::var("API_KEY").unwrap_or_default(),
    };

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .route(
            "/",
            get(health).layer(axum::middleware::from_fn(move |req, next| {
                require_api_key(api_key_config.clone(), req, next)
            })),
        )
        .nest(
            "/api/v1",
            account_router(account_state).merge(content_router(content_state)),
        )
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 31113));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn unknown_route_answers_an_envelope_404() {
        let app = Router::new().route("/", get(health)).fallback(fallback);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/no-such-route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["payload"], serde_json::Value::Null);
        assert_eq!(body["errors"][0], "The requested resource was not found.");
    }
}
