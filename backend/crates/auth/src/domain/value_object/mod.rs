//! Value Objects

pub mod email;
pub mod slug;
pub mod user_name;
