use reachout_core::error::CoreError;

/// Error type for dispatch-engine operations.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// A domain-level error (validation, not-found, conflict).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience alias for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;
