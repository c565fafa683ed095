//! Slug Value Object
//!
//! URL-safe identifier derived from an e-mail address at registration:
//! `@` and `.` are replaced with `-`. Derivation is deterministic.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::email::Email;

/// URL-safe user slug
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug(String);

impl Slug {
    /// Derive a slug from an e-mail address.
    pub fn from_email(email: &Email) -> Self {
        Self(email.as_str().replace('@', "-").replace('.', "-"))
    }

    /// Create from database value
    pub fn from_db(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Get the slug as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_derivation_is_deterministic() {
        let email = Email::new("a.b@c.com").unwrap();
        assert_eq!(Slug::from_email(&email).as_str(), "a-b-c-com");
        assert_eq!(Slug::from_email(&email).as_str(), "a-b-c-com");
    }

    #[test]
    fn slug_replaces_every_at_and_dot() {
        let email = Email::new("first.last@mail.example.org").unwrap();
        assert_eq!(
            Slug::from_email(&email).as_str(),
            "first-last-mail-example-org"
        );
    }
}
