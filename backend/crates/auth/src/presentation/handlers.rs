//! Account HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::envelope::Envelope;
use platform::mailer::Mailer;
use platform::storage::ImageStore;

use crate::application::login::LoginUseCase;
use crate::application::register::RegisterUseCase;
use crate::application::token::TokenIssuer;
use crate::application::upload_image::UploadImageUseCase;
use crate::domain::repository::UserRepository;
use crate::error::AuthError;
use crate::presentation::dto::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UploadImageRequest,
};
use crate::presentation::middleware::CurrentUser;

/// Shared state for the account routes
pub struct AccountAppState<R, M, S> {
    pub repository: Arc<R>,
    pub mailer: Arc<M>,
    pub store: Arc<S>,
    pub tokens: Arc<TokenIssuer>,
}

// Manual impl: a derive would require R: Clone etc.
impl<R, M, S> Clone for AccountAppState<R, M, S> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            mailer: Arc::clone(&self.mailer),
            store: Arc::clone(&self.store),
            tokens: Arc::clone(&self.tokens),
        }
    }
}

/// POST /accounts/login
pub async fn login<R, M, S>(
    State(state): State<AccountAppState<R, M, S>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AuthError>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(Arc::clone(&state.repository), Arc::clone(&state.tokens));
    let outcome = use_case.execute(&req.email, &req.password).await?;

    let body = Envelope::success(LoginResponse::new(&outcome.user, outcome.token));
    Ok((StatusCode::OK, Json(body)))
}

/// POST /accounts
pub async fn register<R, M, S>(
    State(state): State<AccountAppState<R, M, S>>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AuthError>
where
    R: UserRepository + Send + Sync + 'static,
    M: Mailer + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(Arc::clone(&state.repository), Arc::clone(&state.mailer));
    let user = use_case.execute(&req.name, &req.email, &req.password).await?;

    let body = Envelope::success(RegisterResponse::from(&user));
    Ok((StatusCode::CREATED, Json(body)))
}

/// POST /accounts/upload-image (admin only)
pub async fn upload_image<R, M, S>(
    State(state): State<AccountAppState<R, M, S>>,
    Extension(current): Extension<CurrentUser>,
    Json(req): Json<UploadImageRequest>,
) -> Result<StatusCode, AuthError>
where
    R: UserRepository + Send + Sync + 'static,
    S: ImageStore + Send + Sync + 'static,
{
    let use_case =
        UploadImageUseCase::new(Arc::clone(&state.repository), Arc::clone(&state.store));
    use_case.execute(&current.0.email, &req.base64_image).await?;

    Ok(StatusCode::NO_CONTENT)
}
