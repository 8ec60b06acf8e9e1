/// Article ids are PostgreSQL BIGSERIAL values, positive once assigned.
pub type DbId = i64;

/// Stored as TIMESTAMPTZ, always handled in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
