//! Repository for the `members` table.

use rebook_core::types::EntityId;
use sqlx::PgPool;

use crate::models::member::{CreateMember, Member};

/// Column list for members queries.
const COLUMNS: &str = "id, nickname, created_at";

/// Read and mirror operations for members.
pub struct MemberRepo;

impl MemberRepo {
    /// Mirror a member row, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMember) -> Result<Member, sqlx::Error> {
        let query = format!(
            "INSERT INTO members (id, nickname)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(&input.id)
            .bind(&input.nickname)
            .fetch_one(pool)
            .await
    }

    /// Find a member by id.
    pub async fn find_by_id(pool: &PgPool, id: &EntityId) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE id = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
