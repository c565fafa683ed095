//! Auth Configuration

use std::time::Duration;

/// Default token lifetime: 8 hours
const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(8 * 60 * 60);

/// Immutable auth configuration, loaded once at process start.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret for token signing
    pub jwt_secret: String,
    /// Token lifetime
    pub token_ttl: Duration,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }

    /// Override the token lifetime.
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Development configuration. Never use outside local development.
    pub fn development() -> Self {
        Self::new("dev-secret-do-not-use-in-production")
    }
}
