//! Application Layer - Content Services

pub mod categories;
pub mod config;
pub mod posts;

#[cfg(test)]
pub(crate) mod test_support;
