use std::time::Duration;

/// Infrastructure failure in the storage gateway. Surfaced as a 5xx.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl StorageError {
    /// Classify a driver error. Pool exhaustion, closed pools and I/O faults
    /// mean the store is unreachable; everything else is a query failure.
    pub fn from_sqlx(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => {
                StorageError::Unavailable("timed out acquiring a connection".to_string())
            }
            sqlx::Error::PoolClosed => {
                StorageError::Unavailable("connection pool is closed".to_string())
            }
            sqlx::Error::Io(e) => StorageError::Unavailable(format!("i/o error: {}", e)),
            sqlx::Error::Tls(e) => StorageError::Unavailable(format!("tls error: {}", e)),
            other => StorageError::Database(other),
        }
    }

    /// True when the failure says something about reachability rather than
    /// about the query itself.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, StorageError::Timeout(_) | StorageError::Unavailable(_))
    }
}
