/// Content API primary keys are numeric.
pub type CmsId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
