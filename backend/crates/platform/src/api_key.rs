//! API-Key Request Gate
//!
//! Middleware that gates a route behind a static API key carried in a
//! configurable request header. Used for the health-check route; flows
//! never see it.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// API-key configuration, loaded once at process start
#[derive(Debug, Clone)]
pub struct ApiKeyConfig {
    /// Header the client must present the key in
    pub header_name: String,
    /// Expected key value
    pub key: String,
}

impl Default for ApiKeyConfig {
    fn default() -> Self {
        Self {
            header_name: "Api_key".to_string(),
            key: String::new(),
        }
    }
}

/// Middleware that requires the configured API key header.
pub async fn require_api_key(
    config: ApiKeyConfig,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let presented = req
        .headers()
        .get(config.header_name.as_str())
        .and_then(|v| v.to_str().ok());

    match presented {
        Some(key) if !config.key.is_empty() && constant_time_eq(key, &config.key) => {
            Ok(next.run(req).await)
        }
        _ => {
            tracing::warn!(header = %config.header_name, "Request rejected: missing or wrong API key");
            Err(StatusCode::UNAUTHORIZED.into_response())
        }
    }
}

/// Compare two strings without short-circuiting on the first mismatch.
fn constant_time_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();

    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
