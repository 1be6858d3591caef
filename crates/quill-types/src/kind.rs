use std::fmt;

use serde::{Deserialize, Serialize};

/// Width of an account discriminator in bytes.
pub const DISCRIMINATOR_LEN: usize = 8;

/// The record families stored by Quill.
///
/// A `RecordKind` carries two constants: the address-derivation namespace
/// that keeps record families from colliding, and an 8-byte account
/// discriminator written at the head of every account's serialized bytes so
/// scans can disambiguate types. The union is closed: adding a variant is a
/// schema change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// A blog post with chunked content.
    Blog,
    /// A comment linked to a blog by foreign id.
    Comment,
    /// The singleton per-owner author profile.
    AuthorProfile,
}

impl RecordKind {
    /// All record kinds, for discriminator dispatch.
    pub const ALL: [RecordKind; 3] = [Self::Blog, Self::Comment, Self::AuthorProfile];

    /// Stable name used in discriminator derivation and display.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Comment => "comment",
            Self::AuthorProfile => "author_info",
        }
    }

    /// Address-derivation namespace tag for this kind.
    pub fn namespace(&self) -> &'static [u8] {
        self.name().as_bytes()
    }

    /// 8-byte account discriminator: the leading bytes of a domain-separated
    /// BLAKE3 hash of the kind name.
    pub fn discriminator(&self) -> [u8; DISCRIMINATOR_LEN] {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"quill-account:");
        hasher.update(self.name().as_bytes());
        let hash = hasher.finalize();
        let mut disc = [0u8; DISCRIMINATOR_LEN];
        disc.copy_from_slice(&hash.as_bytes()[..DISCRIMINATOR_LEN]);
        disc
    }

    /// Resolve a kind from the discriminator at the head of account bytes.
    ///
    /// Returns `None` for unknown discriminators or data shorter than
    /// [`DISCRIMINATOR_LEN`].
    pub fn from_account_bytes(data: &[u8]) -> Option<Self> {
        let head = data.get(..DISCRIMINATOR_LEN)?;
        Self::ALL.into_iter().find(|kind| kind.discriminator() == head)
    }

    /// Whether records of this kind carry an id dimension.
    ///
    /// The author profile is keyed by owner alone.
    pub fn has_id(&self) -> bool {
        !matches!(self, Self::AuthorProfile)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
