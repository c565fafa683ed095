//! Repository Traits

use kernel::id::UserId;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User persistence operations
///
/// `#[trait_variant::make]` generates a `Send`-bounded variant usable
/// across await points in handlers and spawned tasks.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new account with the default "user" role.
    ///
    /// Returns [`crate::error::AuthError::EmailTaken`] when the e-mail
    /// already exists.
    async fn create(&self, new_user: NewUser) -> AuthResult<User>;

    /// Look up a user by e-mail, roles included.
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Replace the user's profile image URL.
    async fn set_image(&self, id: UserId, image_url: &str) -> AuthResult<()>;
}
