//! Login Use Case
//!
//! One codepath regardless of whether the e-mail exists: unknown e-mail
//! verifies the password against a fallback hash so both failure modes
//! cost one Argon2 verification and produce the same answer.

use std::sync::{Arc, OnceLock};

use platform::password::{ClearTextPassword, HashedPassword};

use crate::application::token::TokenIssuer;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Hash verified against when the e-mail is unknown. Built once; the
/// plaintext it derives from is never accepted as a password.
fn fallback_hash() -> &'static HashedPassword {
    static FALLBACK: OnceLock<HashedPassword> = OnceLock::new();
    FALLBACK.get_or_init(|| {
        // Static input, so neither step can fail at runtime.
        ClearTextPassword::new("fallback-timing-equalizer".to_string())
            .expect("fallback password satisfies the policy")
            .hash()
            .expect("argon2 default parameters are valid")
    })
}

/// Successful login output
#[derive(Debug)]
pub struct LoginOutcome {
    pub user: User,
    pub token: String,
}

/// Authenticates credentials and issues a token.
pub struct LoginUseCase<R> {
    repository: Arc<R>,
    tokens: Arc<TokenIssuer>,
}

impl<R: UserRepository> LoginUseCase<R> {
    pub fn new(repository: Arc<R>, tokens: Arc<TokenIssuer>) -> Self {
        Self { repository, tokens }
    }

    /// Verify credentials and issue a token.
    ///
    /// Malformed input, unknown e-mail and wrong password all collapse
    /// to [`AuthError::InvalidCredentials`].
    pub async fn execute(&self, email: &str, password: &str) -> AuthResult<LoginOutcome> {
        let email = Email::new(email).map_err(|_| AuthError::InvalidCredentials)?;
        let password = ClearTextPassword::new(password.to_string())
            .map_err(|_| AuthError::InvalidCredentials)?;

        let user = self.repository.find_by_email(&email).await?;

        // Verify against the fallback hash when the user is unknown so
        // the two failure modes are not separable by response time.
        let verified = match &user {
            Some(user) => user.password_hash.verify(&password),
            None => {
                fallback_hash().verify(&password);
                false
            }
        };

        let user = match (user, verified) {
            (Some(user), true) => user,
            _ => return Err(AuthError::InvalidCredentials),
        };

        let token = self.tokens.issue(&user)?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginOutcome { user, token })
    }
}
