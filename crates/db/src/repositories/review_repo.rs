//! Repository for the `reviews` table.

use rebook_core::types::EntityId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::review::{CreateReview, Review, ReviewSummary, UpdateReview};

/// Column list for reviews queries.
const COLUMNS: &str = "id, book_id, member_id, content, rating, created_at, updated_at";

/// Column list for review-with-author queries (reviews joined to members).
const SUMMARY_COLUMNS: &str = "r.id, m.nickname, r.content, r.rating, r.created_at";

/// Provides CRUD and paged-query operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Create a new review for a book on behalf of a member, returning the
    /// created row. The review id is minted here.
    pub async fn create(
        pool: &PgPool,
        book_id: &EntityId,
        member_id: &EntityId,
        input: &CreateReview,
    ) -> Result<Review, sqlx::Error> {
        let id = Uuid::new_v4().to_string();
        let query = format!(
            "INSERT INTO reviews (id, book_id, member_id, content, rating)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(&id)
            .bind(book_id)
            .bind(member_id)
            .bind(&input.content)
            .bind(input.rating)
            .fetch_one(pool)
            .await
    }

    /// Find a review by its id.
    pub async fn find_by_id(pool: &PgPool, id: &EntityId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE id = $1");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a review joined with its author's nickname.
    pub async fn find_summary(
        pool: &PgPool,
        id: &EntityId,
    ) -> Result<Option<ReviewSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM reviews r
             JOIN members m ON m.id = r.member_id
             WHERE r.id = $1"
        );
        sqlx::query_as::<_, ReviewSummary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the owning member id of a review, if the review exists.
    pub async fn find_owner(
        pool: &PgPool,
        id: &EntityId,
    ) -> Result<Option<EntityId>, sqlx::Error> {
        sqlx::query_scalar::<_, EntityId>("SELECT member_id FROM reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a review's content, returning the refreshed row.
    pub async fn update_content(
        pool: &PgPool,
        id: &EntityId,
        input: &UpdateReview,
    ) -> Result<Review, sqlx::Error> {
        let query = format!(
            "UPDATE reviews SET content = $1, updated_at = now()
             WHERE id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(&input.content)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Delete a review by its id.
    pub async fn delete(pool: &PgPool, id: &EntityId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// List one page of reviews for a book, newest first. `page` is
    /// zero-based; callers clamp `page` and `size` before delegating here.
    pub async fn page_for_book(
        pool: &PgPool,
        book_id: &EntityId,
        page: i64,
        size: i64,
    ) -> Result<Vec<ReviewSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM reviews r
             JOIN members m ON m.id = r.member_id
             WHERE r.book_id = $1
             ORDER BY r.created_at DESC, r.id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ReviewSummary>(&query)
            .bind(book_id)
            .bind(size)
            .bind(page * size)
            .fetch_all(pool)
            .await
    }

    /// Count all reviews for a book (for pagination metadata).
    pub async fn count_for_book(pool: &PgPool, book_id: &EntityId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reviews WHERE book_id = $1")
            .bind(book_id)
            .fetch_one(pool)
            .await
    }
}
