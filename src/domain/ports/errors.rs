use thiserror::Error;

/// Errors raised by the external store adapters (sensor registry,
/// measurement store, worker directory).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("query failed: {0}")]
    QueryFailed(#[from] sqlx::Error),

    #[error("invalid stored timestamp: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),

    #[error("malformed record: {0}")]
    MalformedRecord(String),

    #[error("store unreachable: {0}")]
    Unreachable(String),
}
