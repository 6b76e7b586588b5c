//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Page-based pagination parameters (`?page=&size=`).
///
/// Values are clamped via `rebook_core::review::{clamp_page,
/// clamp_page_size}` before reaching the repository layer; `size` defaults
/// to 10 when unspecified.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
}
