//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities. Identities are assigned by
//! the database (BIGSERIAL), so these wrap an `i64` rather than minting
//! values locally.

use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
/// let id = UserId::from(7);
/// assert_eq!(id.as_i64(), 7);
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Wrap a database-assigned identity.
    pub fn from_i64(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying value.
    pub fn as_i64(&self) -> i64 {
        self.value
    }
}

// Manual impls: derives would put an unnecessary bound on T.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> serde::Serialize for Id<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for user identities
    pub struct User;
    /// Marker for role identities
    pub struct Role;
    /// Marker for category identities
    pub struct Category;
    /// Marker for post identities
    pub struct Post;
}

/// User identity
pub type UserId = Id<markers::User>;
/// Role identity
pub type RoleId = Id<markers::Role>;
/// Category identity
pub type CategoryId = Id<markers::Category>;
/// Post identity
pub type PostId = Id<markers::Post>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_ids_do_not_mix_values() {
        let a = UserId::from(1);
        let b = UserId::from(1);
        let c = UserId::from(2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_and_debug() {
        let id = CategoryId::from(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(format!("{:?}", id), "Id(42)");
    }

    #[test]
    fn serializes_as_number() {
        let id = PostId::from(9);
        assert_eq!(serde_json::to_value(id).unwrap(), serde_json::json!(9));
    }
}
