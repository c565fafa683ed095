//! Content Configuration

use std::time::Duration;

/// Default category-list cache lifetime: 1 hour
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Default page size for post listings
const DEFAULT_PER_PAGE: i64 = 25;

/// Immutable content configuration, loaded once at process start.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Lifetime of the cached category list
    pub cache_ttl: Duration,
    /// Page size applied when the request omits `perPage`
    pub default_per_page: i64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
            default_per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ContentConfig {
    /// Override the cache lifetime.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}
