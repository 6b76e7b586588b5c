//! Handlers for the review resource.
//!
//! Create, update, and delete are gated by the [`AuthMember`] extractor;
//! update and delete additionally enforce that the authenticated member
//! owns the review before touching it. Listing is public.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use rebook_core::error::CoreError;
use rebook_core::review::{clamp_page, clamp_page_size, validate_rating, validate_review_content};
use rebook_core::types::EntityId;
use rebook_db::models::review::{CreateReview, ReviewSummary, UpdateReview};
use rebook_db::repositories::ReviewRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthMember;
use crate::query::PageParams;
use crate::response::{ApiResponse, MessageResponse, ReviewPage, ReviewPayload};
use crate::state::AppState;

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Fetch a review joined with its author, failing as an operational error
/// if the row is gone.
async fn fetch_summary(pool: &sqlx::PgPool, review_id: &EntityId) -> AppResult<ReviewSummary> {
    ReviewRepo::find_summary(pool, review_id)
        .await?
        .ok_or_else(|| AppError::InternalError(format!("review {review_id} not found")))
}

/// Verify the authenticated member owns the review. A missing review is an
/// operational fault here, not a 404: by the time an ownership check runs
/// the caller has named a concrete resource.
async fn ensure_owner(
    pool: &sqlx::PgPool,
    review_id: &EntityId,
    auth: &AuthMember,
    action: &str,
) -> AppResult<()> {
    let owner = ReviewRepo::find_owner(pool, review_id)
        .await?
        .ok_or_else(|| AppError::InternalError(format!("review {review_id} not found")))?;

    if owner != auth.member_id {
        return Err(AppError::Core(CoreError::Forbidden(format!(
            "Only the review author may {action} this review"
        ))));
    }

    Ok(())
}

/* --------------------------------------------------------------------------
Handlers
-------------------------------------------------------------------------- */

/// POST /reviews/{bookId}
///
/// Create a review for a book on behalf of the authenticated member.
pub async fn create_review(
    auth: AuthMember,
    State(state): State<AppState>,
    Path(book_id): Path<EntityId>,
    Json(input): Json<CreateReview>,
) -> AppResult<impl IntoResponse> {
    validate_review_content(&input.content).map_err(AppError::Core)?;
    validate_rating(input.rating).map_err(AppError::Core)?;

    let review = ReviewRepo::create(&state.pool, &book_id, &auth.member_id, &input).await?;
    let summary = fetch_summary(&state.pool, &review.id).await?;

    tracing::info!(
        member_id = %auth.member_id,
        book_id = %book_id,
        review_id = %review.id,
        "Review created"
    );

    Ok(Json(ApiResponse::ok(
        "Review created successfully",
        ReviewPayload::from(summary),
    )))
}

/// PUT /reviews/{reviewId}
///
/// Update a review's content. Owner-only; the rating and owner are fixed at
/// creation.
pub async fn update_review(
    auth: AuthMember,
    State(state): State<AppState>,
    Path(review_id): Path<EntityId>,
    Json(input): Json<UpdateReview>,
) -> AppResult<impl IntoResponse> {
    validate_review_content(&input.content).map_err(AppError::Core)?;

    ensure_owner(&state.pool, &review_id, &auth, "modify").await?;

    ReviewRepo::update_content(&state.pool, &review_id, &input).await?;
    let summary = fetch_summary(&state.pool, &review_id).await?;

    tracing::info!(
        member_id = %auth.member_id,
        review_id = %review_id,
        "Review updated"
    );

    Ok(Json(ApiResponse::ok(
        "Review updated successfully",
        ReviewPayload::from(summary),
    )))
}

/// DELETE /reviews/{reviewId}
///
/// Delete a review. Owner-only.
pub async fn delete_review(
    auth: AuthMember,
    State(state): State<AppState>,
    Path(review_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    ensure_owner(&state.pool, &review_id, &auth, "delete").await?;

    ReviewRepo::delete(&state.pool, &review_id).await?;

    tracing::info!(
        member_id = %auth.member_id,
        review_id = %review_id,
        "Review deleted"
    );

    Ok(Json(MessageResponse::ok("Review deleted successfully")))
}

/// GET /reviews/book/{bookId}
///
/// List one page of a book's reviews, newest first. Public -- the only
/// unauthenticated operation on this resource.
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(book_id): Path<EntityId>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = clamp_page(params.page);
    let size = clamp_page_size(params.size);

    let reviews = ReviewRepo::page_for_book(&state.pool, &book_id, page, size).await?;
    let total_items = ReviewRepo::count_for_book(&state.pool, &book_id).await?;
    let total_pages = if total_items == 0 {
        0
    } else {
        (total_items + size - 1) / size
    };

    Ok(Json(ApiResponse::ok(
        "Review list retrieved successfully",
        ReviewPage {
            reviews,
            current_page: page,
            total_items,
            total_pages,
        },
    )))
}
