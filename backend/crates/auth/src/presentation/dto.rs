//! Account DTOs
//!
//! Request and response bodies for the account endpoints. Responses are
//! wrapped in the result envelope by the handlers; nothing here ever
//! carries a password hash.

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

/// POST /accounts/login request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /accounts/login response payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub name: String,
    pub email: String,
    pub token: String,
}

impl LoginResponse {
    pub fn new(user: &User, token: String) -> Self {
        Self {
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            token,
        }
    }
}

/// POST /accounts request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// POST /accounts response payload: the created identity's public fields
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub id: i64,
    pub name: String,
    pub roles: Vec<String>,
    pub image: Option<String>,
}

impl From<&User> for RegisterResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_i64(),
            name: user.name.as_str().to_string(),
            roles: user.role_slugs(),
            image: user.image.clone(),
        }
    }
}

/// POST /accounts/upload-image request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageRequest {
    pub base64_image: String,
}
