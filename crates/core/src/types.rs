/// Every stored record is keyed by a UUID.
///
/// Front-end handlers mint UUID v7 ids (time-ordered); users get UUID v4.
pub type RecordId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
