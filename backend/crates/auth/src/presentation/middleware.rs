//! Token Verification Middleware
//!
//! Stateless bearer-token checks at the route boundary. `authenticate`
//! verifies the token and stashes the claims as a request extension;
//! `require_admin` gates admin-only routes on the role claim.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::application::token::{Claims, TokenIssuer};
use crate::error::{AuthError, AuthResult};

/// Role slug required by admin-gated routes
pub const ADMIN_ROLE: &str = "admin";

/// State for the authentication middleware
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub tokens: Arc<TokenIssuer>,
}

/// Verified claims of the requesting user, inserted by [`authenticate`]
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Claims);

/// Extract the bearer token from the Authorization header.
fn bearer_token(headers: &HeaderMap) -> AuthResult<&str> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?;

    let value = header.to_str().map_err(|_| AuthError::InvalidToken)?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::InvalidToken)
}

/// Verify the bearer token and attach [`CurrentUser`] to the request.
pub async fn authenticate(
    State(state): State<AuthMiddlewareState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = bearer_token(req.headers())?;
    let claims = state.tokens.verify(token)?;

    req.extensions_mut().insert(CurrentUser(claims));

    Ok(next.run(req).await)
}

/// Reject requests whose claims lack the admin role.
///
/// Must run after [`authenticate`]; a missing extension means the
/// route was wired without it and answers 401.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AuthError> {
    let current = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AuthError::MissingToken)?;

    if !current.0.has_role(ADMIN_ROLE) {
        return Err(AuthError::Forbidden);
    }

    Ok(next.run(req).await)
}
