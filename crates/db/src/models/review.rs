//! Review model and request DTOs.

use rebook_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: EntityId,
    pub book_id: EntityId,
    pub member_id: EntityId,
    pub content: String,
    pub rating: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A review joined with its author's nickname.
///
/// This is the wire shape of list items and the source of `nickname` for
/// mutation response payloads, so it serializes camelCase.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub id: EntityId,
    pub nickname: String,
    pub content: String,
    pub rating: i32,
    pub created_at: Timestamp,
}

/// Request body for creating a review.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub content: String,
    pub rating: i32,
}

/// Request body for updating a review. Only the content is mutable; the
/// rating and owner are fixed at creation.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReview {
    pub content: String,
}
