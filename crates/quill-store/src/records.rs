use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use quill_types::{Address, OwnerId, RecordKind, DISCRIMINATOR_LEN};

use crate::error::{StoreError, StoreResult};

/// Byte offset of the owner field within account bytes.
///
/// Every record struct puts `owner` first, and bincode serializes the
/// 32-byte array with no prefix, so the owner bytes sit immediately after
/// the discriminator for all record kinds. The owner-scoped scan filter
/// depends on this layout.
pub const OWNER_OFFSET: usize = DISCRIMINATOR_LEN;

/// A blog post with chunked content.
///
/// `content` is an ordered sequence of fixed-capacity chunk slots; unused
/// trailing slots hold the empty-string sentinel. The readable text is the
/// [`quill_chunk::join`] of the slots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogRecord {
    /// Owner identity, set at creation and never mutated.
    pub owner: OwnerId,
    /// Application-supplied id, unique per owner. Immutable.
    pub id: String,
    /// Short title, replaced wholesale on update.
    pub title: String,
    /// Chunk slots.
    pub content: Vec<String>,
}

impl BlogRecord {
    /// Reassembled content text, stopping at the first sentinel slot.
    pub fn content_text(&self) -> String {
        quill_chunk::join(&self.content)
    }

    /// Whether the chunk sequence has no sentinel gaps.
    ///
    /// False means a torn multi-chunk write left a real slot stranded
    /// behind a sentinel; the stranded content is unreachable on read.
    pub fn is_complete(&self) -> bool {
        quill_chunk::is_complete(&self.content)
    }

    /// Encode into discriminator-tagged account bytes.
    pub fn to_account_bytes(&self) -> StoreResult<Vec<u8>> {
        encode_account(RecordKind::Blog, self)
    }

    /// Decode from account bytes, checking the discriminator.
    pub fn from_account_bytes(address: &Address, data: &[u8]) -> StoreResult<Self> {
        decode_account(RecordKind::Blog, address, data)
    }
}

/// A comment linked to a blog by foreign id.
///
/// `blog_id` is not validated for referential existence — callers are
/// responsible for dangling links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Owner identity, set at creation and never mutated.
    pub owner: OwnerId,
    /// Application-supplied id, unique per owner. Immutable.
    pub id: String,
    /// Foreign id of the blog this comment belongs to.
    pub blog_id: String,
    /// Comment text, single field, no chunking.
    pub content: String,
}

impl CommentRecord {
    /// Encode into discriminator-tagged account bytes.
    pub fn to_account_bytes(&self) -> StoreResult<Vec<u8>> {
        encode_account(RecordKind::Comment, self)
    }

    /// Decode from account bytes, checking the discriminator.
    pub fn from_account_bytes(address: &Address, data: &[u8]) -> StoreResult<Self> {
        decode_account(RecordKind::Comment, address, data)
    }
}

/// The singleton per-owner author profile. Keyed by owner alone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorProfileRecord {
    /// Owner identity, set at creation and never mutated.
    pub owner: OwnerId,
    /// Self-introduction text, single field, no chunking.
    pub intro: String,
}

impl AuthorProfileRecord {
    /// Encode into discriminator-tagged account bytes.
    pub fn to_account_bytes(&self) -> StoreResult<Vec<u8>> {
        encode_account(RecordKind::AuthorProfile, self)
    }

    /// Decode from account bytes, checking the discriminator.
    pub fn from_account_bytes(address: &Address, data: &[u8]) -> StoreResult<Self> {
        decode_account(RecordKind::AuthorProfile, address, data)
    }
}

/// Closed union of all record variants, dispatched by discriminator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Record {
    Blog(BlogRecord),
    Comment(CommentRecord),
    AuthorProfile(AuthorProfileRecord),
}

impl Record {
    /// The kind of this record.
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Blog(_) => RecordKind::Blog,
            Self::Comment(_) => RecordKind::Comment,
            Self::AuthorProfile(_) => RecordKind::AuthorProfile,
        }
    }

    /// The owner identity of this record.
    pub fn owner(&self) -> &OwnerId {
        match self {
            Self::Blog(r) => &r.owner,
            Self::Comment(r) => &r.owner,
            Self::AuthorProfile(r) => &r.owner,
        }
    }

    /// Decode any record from account bytes, dispatching on the
    /// discriminator at the head.
    pub fn from_account_bytes(address: &Address, data: &[u8]) -> StoreResult<Self> {
        let kind =
            RecordKind::from_account_bytes(data).ok_or_else(|| StoreError::CorruptAccount {
                address: *address,
                reason: "unknown account discriminator".to_string(),
            })?;
        match kind {
            RecordKind::Blog => BlogRecord::from_account_bytes(address, data).map(Self::Blog),
            RecordKind::Comment => {
                CommentRecord::from_account_bytes(address, data).map(Self::Comment)
            }
            RecordKind::AuthorProfile => {
                AuthorProfileRecord::from_account_bytes(address, data).map(Self::AuthorProfile)
            }
        }
    }
}

fn encode_account<T: Serialize>(kind: RecordKind, record: &T) -> StoreResult<Vec<u8>> {
    let mut data = kind.discriminator().to_vec();
    let body = bincode::serialize(record).map_err(|e| StoreError::Serialization(e.to_string()))?;
    data.extend_from_slice(&body);
    Ok(data)
}

fn decode_account<T: DeserializeOwned>(
    kind: RecordKind,
    address: &Address,
    data: &[u8],
) -> StoreResult<T> {
    let head = data
        .get(..DISCRIMINATOR_LEN)
        .ok_or_else(|| StoreError::CorruptAccount {
            address: *address,
            reason: "account shorter than discriminator".to_string(),
        })?;
    if head != kind.discriminator() {
        let found = RecordKind::from_account_bytes(data)
            .map(|k| k.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        return Err(StoreError::CorruptAccount {
            address: *address,
            reason: format!("expected {kind} account, got {found}"),
        });
    }
    bincode::deserialize(&data[DISCRIMINATOR_LEN..]).map_err(|e| StoreError::CorruptAccount {
        address: *address,
        reason: format!("decode failed: {e}"),
    })
}
