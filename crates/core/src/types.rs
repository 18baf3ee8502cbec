use chrono::{DateTime, Utc};

/// Primary key type for all tables (`BIGSERIAL`).
pub type DbId = i64;

/// Instant stored in `TIMESTAMPTZ` columns.
pub type Timestamp = DateTime<Utc>;
