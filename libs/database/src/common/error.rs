/// Database error type for connector and store operations
///
/// `Unavailable` is the only variant produced without touching the driver; it
/// means no connection was established at startup.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// No connection configured or established
    #[error("Database not available. Check DATABASE_URL and DATABASE_NAME environment variables")]
    Unavailable,

    /// Driver error on a live connection (query, insert, listing)
    #[cfg(feature = "mongodb")]
    #[error("{0}")]
    Mongo(#[from] mongodb::error::Error),

    /// Connection could not be verified at startup
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

impl DatabaseError {
    /// Whether this error means the store was never connected
    pub fn is_unavailable(&self) -> bool {
        matches!(self, DatabaseError::Unavailable)
    }
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
