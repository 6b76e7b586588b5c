//! Domain layer for the rebook review service.
//!
//! Carries the error taxonomy, shared id/timestamp aliases, and the review
//! validation rules used by both the DB and API layers.

pub mod error;
pub mod review;
pub mod types;
