/// Errors from account storage operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific failure.
    #[error("ledger backend error: {0}")]
    Backend(String),
}

/// Result alias for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
