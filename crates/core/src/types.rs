/// All entity primary keys are TEXT columns holding UUID strings minted by
/// the service (members, books, and reviews are keyed the same way across
/// the platform).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
