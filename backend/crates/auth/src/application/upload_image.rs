//! Profile Image Upload Use Case
//!
//! Accepts a base64 payload (optionally a full `data:` URL), stores the
//! decoded bytes under a random file name and records the public URL on
//! the user's row.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use platform::storage::ImageStore;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Strip an optional `data:<mime>;base64,` prefix and decode the rest.
fn decode_base64_image(input: &str) -> AuthResult<Vec<u8>> {
    let encoded = match input.split_once(";base64,") {
        Some((_, rest)) => rest,
        None => input,
    };

    BASE64
        .decode(encoded.trim())
        .map_err(|_| AuthError::Validation(vec!["The image is not valid base64.".to_string()]))
}

/// Stores an uploaded profile image for the authenticated user.
pub struct UploadImageUseCase<R, S> {
    repository: Arc<R>,
    store: Arc<S>,
}

impl<R, S> UploadImageUseCase<R, S>
where
    R: UserRepository,
    S: ImageStore,
{
    pub fn new(repository: Arc<R>, store: Arc<S>) -> Self {
        Self { repository, store }
    }

    /// Decode, store and attach the image. Returns the public URL.
    pub async fn execute(&self, email: &str, base64_image: &str) -> AuthResult<String> {
        if base64_image.trim().is_empty() {
            return Err(AuthError::Validation(vec![
                "The image is required.".to_string(),
            ]));
        }

        let bytes = decode_base64_image(base64_image)?;

        let email = Email::new(email).map_err(|_| AuthError::UserNotFound)?;
        let user = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let file_name = format!("{}.jpg", uuid::Uuid::new_v4());
        let url = self.store.put(&file_name, &bytes).await?;

        self.repository.set_image(user.id, &url).await?;

        tracing::info!(user_id = %user.id, "Profile image updated");

        Ok(url)
    }
}
