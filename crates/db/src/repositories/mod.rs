//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod member_repo;
pub mod review_repo;

pub use member_repo::MemberRepo;
pub use review_repo::ReviewRepo;
