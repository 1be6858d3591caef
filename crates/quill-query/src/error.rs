use quill_ledger::LedgerError;
use quill_store::StoreError;

/// Errors from query operations.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Failure in the underlying account ledger.
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// A scanned account could not be decoded as its advertised kind.
    #[error("record decode error: {0}")]
    Decode(#[from] StoreError),
}

/// Result alias for query operations.
pub type QueryResult<T> = Result<T, QueryError>;
