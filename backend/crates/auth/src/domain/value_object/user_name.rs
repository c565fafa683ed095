//! User Name Value Object
//!
//! Display name presented on posts and in the token claims.
//! Invariant: 3 to 40 characters after trimming.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 3;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 40;

/// User display name value object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name with validation
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into().trim().to_string();

        if name.is_empty() {
            return Err(AppError::bad_request("The name is required."));
        }

        let char_count = name.chars().count();
        if char_count < USER_NAME_MIN_LENGTH || char_count > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "The name must be between {} and {} characters.",
                USER_NAME_MIN_LENGTH, USER_NAME_MAX_LENGTH
            )));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_valid() {
        assert!(UserName::new("Ana").is_ok());
        assert!(UserName::new("  Maria Silva  ").is_ok()); // trimmed
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn name_invalid() {
        assert!(UserName::new("").is_err());
        assert!(UserName::new("ab").is_err());
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH + 1)).is_err());
        assert!(UserName::new("   ").is_err());
    }

    #[test]
    fn name_trimmed() {
        let name = UserName::new("  Ana  ").unwrap();
        assert_eq!(name.as_str(), "Ana");
    }
}
