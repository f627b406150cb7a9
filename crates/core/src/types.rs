/// Content records are keyed by a random (v4) UUID.
pub type ContentId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
