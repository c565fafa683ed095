//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, salted, constant-time verification)
//! - Outbound SMTP mail behind a capability trait
//! - Image blob storage behind a capability trait
//! - API-key request gate middleware

pub mod api_key;
pub mod mailer;
pub mod password;
pub mod storage;
