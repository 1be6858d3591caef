/// Errors from chunk codec operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChunkError {
    /// Content splits into more chunks than the configured slot count.
    #[error("content too large: needs {needed} chunk slots, max is {max_slots}")]
    ContentTooLarge { needed: usize, max_slots: usize },

    /// A single chunk exceeds the configured capacity.
    #[error("chunk of {len} bytes exceeds capacity {capacity}")]
    ChunkTooLarge { len: usize, capacity: usize },

    /// A slot index is outside the configured slot range.
    #[error("slot index {index} out of range (max slots {max_slots})")]
    SlotOutOfRange { index: usize, max_slots: usize },

    /// The configuration itself is unusable.
    #[error("invalid chunk config: {0}")]
    InvalidConfig(&'static str),
}

/// Result alias for chunk codec operations.
pub type ChunkResult<T> = Result<T, ChunkError>;
