//! Shared response envelope types for API handlers.
//!
//! Every response body carries `success` and `message`; success responses
//! merge their payload fields at the top level. Use these types instead of
//! ad-hoc maps to get compile-time-checked response shapes.

use rebook_core::types::EntityId;
use rebook_db::models::review::ReviewSummary;
use serde::Serialize;

/// Success envelope with a payload flattened into the top-level object.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ApiResponse::ok("Review created successfully", payload)))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

/// Success envelope with no payload (delete confirmations).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Failure envelope: status code, kind message, and (for internal errors)
/// the raw failure text.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Payload for create/update responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPayload {
    pub review_id: EntityId,
    pub nickname: String,
    pub content: String,
    pub rating: i32,
}

impl From<ReviewSummary> for ReviewPayload {
    fn from(summary: ReviewSummary) -> Self {
        Self {
            review_id: summary.id,
            nickname: summary.nickname,
            content: summary.content,
            rating: summary.rating,
        }
    }
}

/// Payload for the paginated listing response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPage {
    pub reviews: Vec<ReviewSummary>,
    pub current_page: i64,
    pub total_items: i64,
    pub total_pages: i64,
}
