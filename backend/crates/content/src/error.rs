//! Content Error Types
//!
//! Category and post flow errors. Every variant renders as the result
//! envelope; database detail is logged server-side only and answered
//! with an opaque numbered code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::envelope::Envelope;
use kernel::error::kind::ErrorKind;
use thiserror::Error;

/// Content-specific result type alias
pub type ContentResult<T> = Result<T, ContentError>;

/// Category and post flow errors
#[derive(Debug, Error)]
pub enum ContentError {
    /// Request input failed schema validation
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    /// Category id does not exist
    #[error("Category not found")]
    CategoryNotFound,

    /// Post id does not exist
    #[error("Post not found")]
    PostNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ContentError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContentError::Validation(_) => StatusCode::BAD_REQUEST,
            ContentError::CategoryNotFound | ContentError::PostNotFound => StatusCode::NOT_FOUND,
            ContentError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContentError::Validation(_) => ErrorKind::BadRequest,
            ContentError::CategoryNotFound | ContentError::PostNotFound => ErrorKind::NotFound,
            ContentError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Client-facing messages
    pub fn public_messages(&self) -> Vec<String> {
        match self {
            ContentError::Validation(errors) => errors.clone(),
            ContentError::CategoryNotFound => {
                vec!["The category was not found.".to_string()]
            }
            ContentError::PostNotFound => vec!["Content not found.".to_string()],
            ContentError::Database(_) => {
                vec!["05X04 - Internal server failure.".to_string()]
            }
        }
    }

    fn log(&self) {
        match self {
            ContentError::Database(e) => {
                tracing::error!(error = %e, "Content database error");
            }
            _ => {
                tracing::debug!(error = %self, "Content error");
            }
        }
    }
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        let body = Envelope::<()>::failures(self.public_messages());
        (status, axum::Json(body)).into_response()
    }
}
