//! Auth Error Types
//!
//! Account-flow error variants that integrate with the unified
//! `kernel::error::AppError` system. Every variant renders as the result
//! envelope; internal detail is logged server-side only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::envelope::Envelope;
use kernel::error::kind::ErrorKind;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Account-flow error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Request input failed schema validation (field-level messages)
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    /// Unknown e-mail or wrong password; never distinguished outward
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Duplicate e-mail on registration
    #[error("E-mail already in use")]
    EmailTaken,

    /// User record not found
    #[error("User not found")]
    UserNotFound,

    /// Bearer token missing from the request
    #[error("Missing bearer token")]
    MissingToken,

    /// Bearer token failed signature or expiry verification
    #[error("Invalid bearer token")]
    InvalidToken,

    /// Authenticated but lacking the required role
    #[error("Insufficient role")]
    Forbidden,

    /// Image blob write failed
    #[error("Storage error: {0}")]
    Storage(#[from] platform::storage::StorageError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            // Duplicate e-mail answers 400, not 409, matching the public API contract
            AuthError::EmailTaken => StatusCode::BAD_REQUEST,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::MissingToken | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            AuthError::Storage(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) | AuthError::EmailTaken => ErrorKind::BadRequest,
            AuthError::InvalidCredentials
            | AuthError::MissingToken
            | AuthError::InvalidToken => ErrorKind::Unauthorized,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::Forbidden => ErrorKind::Forbidden,
            AuthError::Storage(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Client-facing messages. Internal faults answer with an opaque
    /// numbered code; the detail never leaves the server.
    pub fn public_messages(&self) -> Vec<String> {
        match self {
            AuthError::Validation(errors) => errors.clone(),
            AuthError::InvalidCredentials => vec!["Invalid e-mail or password.".to_string()],
            AuthError::EmailTaken => {
                vec!["05X99 - This e-mail is already in use.".to_string()]
            }
            AuthError::UserNotFound => vec!["User not found.".to_string()],
            AuthError::MissingToken | AuthError::InvalidToken => {
                vec!["Authentication required.".to_string()]
            }
            AuthError::Forbidden => {
                vec!["You do not have permission to access this resource.".to_string()]
            }
            AuthError::Storage(_) => vec!["05X14 - Internal server failure.".to_string()],
            AuthError::Database(_) | AuthError::Internal(_) => {
                vec!["05X86 - Internal server failure.".to_string()]
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AuthError::Storage(e) => {
                tracing::error!(error = %e, "Image storage error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::EmailTaken => {
                tracing::warn!("Registration attempt with duplicate e-mail");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        let body = Envelope::<()>::failures(self.public_messages());
        (status, axum::Json(body)).into_response()
    }
}
