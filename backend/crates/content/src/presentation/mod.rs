//! Presentation Layer - HTTP boundary

pub mod dto;
pub mod handlers;
pub mod router;
