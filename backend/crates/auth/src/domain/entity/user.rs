//! User Entity

use kernel::id::{RoleId, UserId};
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, slug::Slug, user_name::UserName};

/// A role granted to a user, e.g. "admin" or "user".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub slug: String,
}

/// A registered account.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub email: Email,
    pub password_hash: HashedPassword,
    pub slug: Slug,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub roles: Vec<Role>,
}

impl User {
    /// Role slugs, as embedded in issued tokens.
    pub fn role_slugs(&self) -> Vec<String> {
        self.roles.iter().map(|r| r.slug.clone()).collect()
    }

    /// Whether the user carries the given role slug.
    pub fn has_role(&self, slug: &str) -> bool {
        self.roles.iter().any(|r| r.slug == slug)
    }
}

/// Data required to persist a new account.
#[derive(Debug)]
pub struct NewUser {
    pub name: UserName,
    pub email: Email,
    pub password_hash: HashedPassword,
    pub slug: Slug,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(roles: Vec<Role>) -> User {
        let email = Email::new("ana@example.com").unwrap();
        let password_hash = platform::password::ClearTextPassword::new("secret".to_string())
            .unwrap()
            .hash()
            .unwrap();
        User {
            id: UserId::from(1),
            name: UserName::new("Ana").unwrap(),
            slug: Slug::from_email(&email),
            email,
            password_hash,
            bio: None,
            image: None,
            roles,
        }
    }

    #[test]
    fn role_checks() {
        let user = sample_user(vec![Role {
            id: RoleId::from(1),
            name: "Admin".into(),
            slug: "admin".into(),
        }]);
        assert!(user.has_role("admin"));
        assert!(!user.has_role("editor"));
        assert_eq!(user.role_slugs(), vec!["admin".to_string()]);
    }
}
