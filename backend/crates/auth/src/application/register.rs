//! Registration Use Case
//!
//! Validates input field by field (collecting every violation into one
//! answer), hashes the password, persists the account and fires the
//! welcome mail on a detached task. Mail failure never fails the
//! registration; it is logged and dropped.

use std::sync::Arc;

use platform::mailer::Mailer;
use platform::password::ClearTextPassword;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, slug::Slug, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Registers new accounts.
pub struct RegisterUseCase<R, M> {
    repository: Arc<R>,
    mailer: Arc<M>,
}

impl<R, M> RegisterUseCase<R, M>
where
    R: UserRepository,
    M: Mailer + Send + Sync + 'static,
{
    pub fn new(repository: Arc<R>, mailer: Arc<M>) -> Self {
        Self { repository, mailer }
    }

    /// Create the account and schedule the welcome mail.
    pub async fn execute(&self, name: &str, email: &str, password: &str) -> AuthResult<User> {
        let mut errors = Vec::new();

        let name = UserName::new(name).map_err(|e| errors.extend(e.messages())).ok();
        let email = Email::new(email).map_err(|e| errors.extend(e.messages())).ok();
        let password = ClearTextPassword::new(password.to_string())
            .map_err(|e| errors.push(e.to_string()))
            .ok();

        let (Some(name), Some(email), Some(password)) = (name, email, password) else {
            return Err(AuthError::Validation(errors));
        };

        let password_hash = password
            .hash()
            .map_err(|e| AuthError::Internal(format!("password hashing failed: {e}")))?;

        let slug = Slug::from_email(&email);

        let user = self
            .repository
            .create(NewUser {
                name,
                email,
                password_hash,
                slug,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User registered");

        // Welcome mail is decoupled from the registration outcome.
        let mailer = Arc::clone(&self.mailer);
        let to_name = user.name.as_str().to_string();
        let to_email = user.email.as_str().to_string();
        tokio::spawn(async move {
            let body = format!("Welcome to the blog, {to_name}!");
            if let Err(e) = mailer.send(&to_name, &to_email, "Welcome", &body).await {
                tracing::warn!(error = %e, to = %to_email, "Welcome mail failed");
            }
        });

        Ok(user)
    }
}
