//! TTL Memory Cache
//!
//! Fixed-TTL read-through cache for list queries. Entries expire, they
//! are never invalidated on writes: a read inside the window may serve
//! data that has since changed. Concurrent population races are
//! tolerated; worst case the query runs more than once.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

struct Entry<T> {
    value: T,
    expires_at: Instant,
}

/// In-memory cache with a fixed time-to-live per entry.
pub struct TtlCache<T> {
    ttl: Duration,
    entries: RwLock<HashMap<String, Entry<T>>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Return the cached value unless it has expired.
    pub async fn get(&self, key: &str) -> Option<T> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;

        if entry.expires_at <= Instant::now() {
            return None;
        }

        Some(entry.value.clone())
    }

    /// Store a value, resetting its expiry window.
    pub async fn put(&self, key: &str, value: T) {
        let entry = Entry {
            value,
            expires_at: Instant::now() + self.ttl,
        };
        self.entries.write().await.insert(key.to_string(), entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hit_within_ttl() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.put("k", vec![1, 2, 3]).await;
        assert_eq!(cache.get("k").await, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn miss_after_expiry() {
        let cache = TtlCache::new(Duration::ZERO);
        cache.put("k", 1).await;
        assert_eq!(cache.get("k").await, None);
    }

    #[tokio::test]
    async fn stale_value_served_until_expiry() {
        // Writes do not invalidate; a fresher value only lands via put.
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.put("k", "old").await;
        assert_eq!(cache.get("k").await, Some("old"));

        cache.put("k", "new").await;
        assert_eq!(cache.get("k").await, Some("new"));
    }

    #[tokio::test]
    async fn unknown_key_misses() {
        let cache: TtlCache<i32> = TtlCache::new(Duration::from_secs(60));
        assert_eq!(cache.get("nope").await, None);
    }
}
