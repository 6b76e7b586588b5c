//! Route definitions for the review resource, mounted at `/reviews`.
//!
//! POST takes a book id and PUT/DELETE take a review id on the same path
//! segment; axum requires one parameter name per segment, so the routes
//! share `{id}` and each handler names its own path parameter.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::review;
use crate::state::AppState;

/// Review routes.
///
/// ```text
/// POST   /{bookId}        create_review
/// PUT    /{reviewId}      update_review
/// DELETE /{reviewId}      delete_review
/// GET    /book/{bookId}   list_reviews
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            post(review::create_review)
                .put(review::update_review)
                .delete(review::delete_review),
        )
        .route("/book/{book_id}", get(review::list_reviews))
}
