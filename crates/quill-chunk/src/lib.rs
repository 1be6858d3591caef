//! Chunk codec for the Quill record ledger.
//!
//! Account storage is size-limited, so variable-length text is split into an
//! ordered sequence of fixed-capacity chunk slots on write and reassembled on
//! read. The empty string is the sentinel marking "no more real content":
//! reassembly stops at the first sentinel slot, which is what makes shrinking
//! updates safe without zeroing every stale slot.
//!
//! # Protocol Rules
//!
//! 1. Slot 0 is always written, even for empty content (`split("")` is `[""]`).
//! 2. No chunk exceeds the configured capacity in bytes; chunks never split
//!    a UTF-8 scalar value.
//! 3. Content at an exact multiple of the capacity produces no trailing empty
//!    chunk — that would read back as an early terminator.
//! 4. [`join`] ignores everything at and after the first sentinel, tolerating
//!    stale slots left behind by a previous, longer piece of content.
//! 5. More chunks than the configured slot count is a hard error at write
//!    time, never a silent truncation.

pub mod codec;
pub mod error;

pub use codec::{is_complete, join, ChunkConfig, SENTINEL};
pub use error::{ChunkError, ChunkResult};
