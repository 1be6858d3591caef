use quill_chunk::ChunkError;
use quill_ledger::LedgerError;
use quill_types::{Address, OwnerId, RecordKind, TypeError};

/// Errors from record store operations.
///
/// All variants are terminal failures of a single call; nothing is retried
/// internally. A multi-chunk sequence that fails partway is resumed by
/// reissuing the remaining chunk calls.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Create targeted an address that already holds a record.
    #[error("{kind} record already exists at {address}")]
    AlreadyExists { kind: RecordKind, address: Address },

    /// Mutation or delete targeted an absent record.
    #[error("{kind} record not found at {address}")]
    NotFound { kind: RecordKind, address: Address },

    /// The signer is not the stored owner.
    #[error("signer {signer} is not the owner of the {kind} record at {address}")]
    Unauthorized {
        kind: RecordKind,
        address: Address,
        signer: OwnerId,
    },

    /// Content exceeds the chunk slot budget, or a chunk or slot index is
    /// out of range.
    #[error("content too large: {0}")]
    ContentTooLarge(#[from] ChunkError),

    /// A record id or identity failed address-derivation constraints.
    #[error("malformed seed: {0}")]
    MalformedSeed(#[from] TypeError),

    /// Failure in the underlying account ledger.
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Account bytes could not be decoded.
    #[error("corrupt account at {address}: {reason}")]
    CorruptAccount { address: Address, reason: String },

    /// A record could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for record store operations.
pub type StoreResult<T> = Result<T, StoreError>;
