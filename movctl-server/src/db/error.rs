//! Database error type

/// Failure talking to the movement store
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Network, TLS or authentication handshake failed
    #[error("{0}")]
    Connect(#[source] sqlx::Error),

    /// Statement failed on an open connection
    #[error("{0}")]
    Query(#[from] sqlx::Error),
}

impl DbError {
    /// True when the store could not be reached at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Connect(_))
    }
}
