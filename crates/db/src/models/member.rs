//! Member model.
//!
//! Members are provisioned by the account service; the review service only
//! reads them for authorship (nickname lookup) and mirrors new rows when
//! seeding test data.

use rebook_core::types::{EntityId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Member {
    pub id: EntityId,
    pub nickname: String,
    pub created_at: Timestamp,
}

/// Input for mirroring a member row (seeding and tests; there is no member
/// HTTP surface in this service).
#[derive(Debug, Clone)]
pub struct CreateMember {
    pub id: EntityId,
    pub nickname: String,
}
