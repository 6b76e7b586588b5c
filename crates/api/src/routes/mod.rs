pub mod health;
pub mod review;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /reviews/{bookId}           POST    create review (auth)
/// /reviews/{reviewId}         PUT     update review (auth, owner only)
/// /reviews/{reviewId}         DELETE  delete review (auth, owner only)
/// /reviews/book/{bookId}      GET     paginated listing (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/reviews", review::router())
}
