//! Token Issuance and Verification
//!
//! Stateless HS256 JWTs carrying identity, display data and role slugs.
//! Verification checks signature and expiry only; no revocation list.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::error::{AuthError, AuthResult};

/// JWT claims embedded in every issued token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id, as a string per JWT convention
    pub sub: String,
    /// Display name
    pub name: String,
    /// E-mail address
    pub email: String,
    /// Role slugs, e.g. ["user"] or ["user", "admin"]
    pub roles: Vec<String>,
    /// Issued-at (Unix seconds)
    pub iat: i64,
    /// Expiry (Unix seconds)
    pub exp: i64,
}

impl Claims {
    /// Whether the claims carry the given role slug.
    pub fn has_role(&self, slug: &str) -> bool {
        self.roles.iter().any(|r| r == slug)
    }
}

/// Issues and verifies signed tokens.
///
/// Keys are derived from the secret once at construction and shared
/// behind an `Arc` in application state.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl: Duration::seconds(config.token_ttl.as_secs() as i64),
        }
    }

    /// Issue a token for an authenticated user.
    pub fn issue(&self, user: &User) -> AuthResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.as_i64().to_string(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            roles: user.role_slugs(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("token encoding failed: {e}")))
    }

    /// Verify a token's signature and expiry, returning its claims.
    pub fn verify(&self, token: &str) -> AuthResult<Claims> {
        let validation = Validation::default();

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}
