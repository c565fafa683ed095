//! In-memory fakes shared by the use-case tests.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::{RoleId, UserId};
use platform::password::ClearTextPassword;
use tokio::sync::Mutex;

use crate::application::config::AuthConfig;
use crate::application::token::TokenIssuer;
use crate::domain::entity::user::{NewUser, Role, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, slug::Slug, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// In-memory repository fake, keyed by e-mail.
pub(crate) struct InMemoryUsers {
    pub users: Mutex<HashMap<String, User>>,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }

    pub async fn insert(&self, user: User) {
        self.users
            .lock()
            .await
            .insert(user.email.as_str().to_string(), user);
    }
}

impl UserRepository for InMemoryUsers {
    async fn create(&self, new_user: NewUser) -> AuthResult<User> {
        let mut users = self.users.lock().await;
        if users.contains_key(new_user.email.as_str()) {
            return Err(AuthError::EmailTaken);
        }
        let user = User {
            id: UserId::from(users.len() as i64 + 1),
            name: new_user.name,
            slug: new_user.slug,
            email: new_user.email.clone(),
            password_hash: new_user.password_hash,
            bio: None,
            image: None,
            roles: vec![Role {
                id: RoleId::from(1),
                name: "User".into(),
                slug: "user".into(),
            }],
        };
        users.insert(new_user.email.as_str().to_string(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self.users.lock().await.get(email.as_str()).cloned())
    }

    async fn set_image(&self, id: UserId, image_url: &str) -> AuthResult<()> {
        let mut users = self.users.lock().await;
        for user in users.values_mut() {
            if user.id == id {
                user.image = Some(image_url.to_string());
                return Ok(());
            }
        }
        Err(AuthError::UserNotFound)
    }
}

/// Mailer fake that accepts everything silently.
pub(crate) struct NullMailer;

impl platform::mailer::Mailer for NullMailer {
    async fn send(
        &self,
        _to_name: &str,
        _to_email: &str,
        _subject: &str,
        _body: &str,
    ) -> Result<(), platform::mailer::MailerError> {
        Ok(())
    }
}

/// Store fake that returns a deterministic URL.
pub(crate) struct NullStore;

impl platform::storage::ImageStore for NullStore {
    async fn put(
        &self,
        file_name: &str,
        _bytes: &[u8],
    ) -> Result<String, platform::storage::StorageError> {
        Ok(format!("https://cdn.test/{file_name}"))
    }
}

/// Seed an additional account carrying the admin role.
pub(crate) async fn seed_admin(repo: &InMemoryUsers, email: &str, password: &str) {
    let email = Email::new(email).unwrap();
    let password_hash = ClearTextPassword::new(password.to_string())
        .unwrap()
        .hash()
        .unwrap();
    repo.insert(User {
        id: UserId::from(99),
        name: UserName::new("Admin").unwrap(),
        slug: Slug::from_email(&email),
        email,
        password_hash,
        bio: None,
        image: None,
        roles: vec![
            Role {
                id: RoleId::from(1),
                name: "User".into(),
                slug: "user".into(),
            },
            Role {
                id: RoleId::from(2),
                name: "Admin".into(),
                slug: "admin".into(),
            },
        ],
    })
    .await;
}

pub(crate) fn token_issuer() -> Arc<TokenIssuer> {
    Arc::new(TokenIssuer::new(&AuthConfig::development()))
}

/// Repository pre-seeded with one account.
pub(crate) async fn seeded_repo(email: &str, password: &str) -> Arc<InMemoryUsers> {
    let repo = Arc::new(InMemoryUsers::new());
    let email = Email::new(email).unwrap();
    let password_hash = ClearTextPassword::new(password.to_string())
        .unwrap()
        .hash()
        .unwrap();
    repo.insert(User {
        id: UserId::from(1),
        name: UserName::new("Ana").unwrap(),
        slug: Slug::from_email(&email),
        email,
        password_hash,
        bio: None,
        image: None,
        roles: vec![Role {
            id: RoleId::from(1),
            name: "User".into(),
            slug: "user".into(),
        }],
    })
    .await;
    repo
}
