//! Application Layer - Account Use Cases

pub mod config;
pub mod login;
pub mod register;
pub mod token;
pub mod upload_image;

#[cfg(test)]
pub(crate) mod test_support;
