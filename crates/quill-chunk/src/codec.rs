use serde::{Deserialize, Serialize};

use crate::error::{ChunkError, ChunkResult};

/// The sentinel slot value: "no more real content".
pub const SENTINEL: &str = "";

/// Chunking configuration shared between writer and reader.
///
/// Capacity is measured in **bytes** — the unit account storage bills
/// against — never in code points. Changing either constant is a breaking
/// schema change: accounts written under a different capacity mis-split on
/// read unless every chunk is replayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkConfig {
    capacity: usize,
    max_slots: usize,
}

impl ChunkConfig {
    /// Default chunk capacity in bytes.
    pub const DEFAULT_CAPACITY: usize = 500;
    /// Default maximum slot count.
    pub const DEFAULT_MAX_SLOTS: usize = 20;
    /// Smallest usable capacity: a UTF-8 scalar value can occupy 4 bytes,
    /// and a chunk must never split one.
    pub const MIN_CAPACITY: usize = 4;

    /// Create a configuration, validating the constants.
    pub fn new(capacity: usize, max_slots: usize) -> ChunkResult<Self> {
        if capacity < Self::MIN_CAPACITY {
            return Err(ChunkError::InvalidConfig(
                "capacity below 4 bytes cannot hold every UTF-8 scalar",
            ));
        }
        if max_slots == 0 {
            return Err(ChunkError::InvalidConfig("max_slots must be at least 1"));
        }
        Ok(Self {
            capacity,
            max_slots,
        })
    }

    /// Chunk capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Maximum number of chunk slots per record.
    pub fn max_slots(&self) -> usize {
        self.max_slots
    }

    /// Upper bound on content byte length: capacity times slot count.
    pub fn max_content_len(&self) -> usize {
        self.capacity * self.max_slots
    }

    /// Split `content` into consecutive chunks of at most `capacity` bytes.
    ///
    /// Empty input yields a single empty chunk, so slot 0 is always written.
    /// Content at an exact multiple of the capacity produces no trailing
    /// empty chunk. Chunks end on UTF-8 scalar boundaries, so a non-final
    /// chunk of multibyte text may hold slightly fewer than `capacity` bytes.
    ///
    /// Fails with [`ChunkError::ContentTooLarge`] when the content needs more
    /// slots than the configuration allows.
    pub fn split(&self, content: &str) -> ChunkResult<Vec<String>> {
        if content.is_empty() {
            return Ok(vec![String::new()]);
        }
        let mut chunks = Vec::with_capacity(content.len() / self.capacity + 1);
        let mut rest = content;
        while !rest.is_empty() {
            if rest.len() <= self.capacity {
                chunks.push(rest.to_string());
                break;
            }
            let mut cut = self.capacity;
            while !rest.is_char_boundary(cut) {
                cut -= 1;
            }
            let (head, tail) = rest.split_at(cut);
            chunks.push(head.to_string());
            rest = tail;
        }
        if chunks.len() > self.max_slots {
            return Err(ChunkError::ContentTooLarge {
                needed: chunks.len(),
                max_slots: self.max_slots,
            });
        }
        Ok(chunks)
    }

    /// Validate a single chunk against the capacity.
    pub fn check_chunk(&self, chunk: &str) -> ChunkResult<()> {
        if chunk.len() > self.capacity {
            return Err(ChunkError::ChunkTooLarge {
                len: chunk.len(),
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Validate a slot index against the slot count.
    pub fn check_slot(&self, index: usize) -> ChunkResult<()> {
        if index >= self.max_slots {
            return Err(ChunkError::SlotOutOfRange {
                index,
                max_slots: self.max_slots,
            });
        }
        Ok(())
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            max_slots: Self::DEFAULT_MAX_SLOTS,
        }
    }
}

/// Reassemble content from chunk slots in index order.
///
/// Stops at, and excludes, the first sentinel slot. Slots after a sentinel
/// are ignored even if non-empty: they are stale leftovers from a previous,
/// longer piece of content, not an error.
pub fn join<S: AsRef<str>>(slots: &[S]) -> String {
    let mut out = String::new();
    for slot in slots {
        let slot = slot.as_ref();
        if slot == SENTINEL {
            break;
        }
        out.push_str(slot);
    }
    out
}

/// Torn-write detector: `true` iff no real slot follows the first sentinel.
///
/// A completed chunk sequence always satisfies this. A sequence written out
/// of order, or abandoned between calls, can leave a real slot stranded
/// behind a sentinel gap — [`join`] silently treats that content as
/// nonexistent, so callers who need to distinguish use this predicate.
pub fn is_complete<S: AsRef<str>>(slots: &[S]) -> bool {
    let mut seen_sentinel = false;
    for slot in slots {
        if slot.as_ref() == SENTINEL {
            seen_sentinel = true;
        } else if seen_sentinel {
            return false;
        }
    }
    true
}
