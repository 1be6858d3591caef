/// Errors from foundation type construction and parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TypeError {
    /// A hex string could not be decoded.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// A byte value had the wrong width.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A record id exceeds the maximum derivation seed length.
    #[error("record id too long for address seed: {actual} bytes (max {max})")]
    SeedTooLong { max: usize, actual: usize },
}
