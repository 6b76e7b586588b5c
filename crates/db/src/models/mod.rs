//! Database models and request DTOs, one module per entity.

pub mod member;
pub mod review;
