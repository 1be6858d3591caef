use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::owner::OwnerId;

/// Maximum byte length of a record id used as a derivation seed.
pub const MAX_SEED_LEN: usize = 32;

/// Deterministic account address.
///
/// An `Address` is derived from a namespace tag, an owner identity, and an
/// optional record id via a domain-separated BLAKE3 hash. The same triple
/// always rederives the identical address; this is how update and delete
/// find their target without any lookup table.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address([u8; 32]);

impl Address {
    /// Derive the account address for (namespace, owner, id).
    ///
    /// Pass `None` for singleton-per-owner records, which have no id
    /// dimension. The derivation is order-sensitive: each component is
    /// fed to the hasher behind a separator, so `Some("")` and `None`
    /// produce distinct addresses.
    ///
    /// Fails with [`TypeError::SeedTooLong`] if the id exceeds
    /// [`MAX_SEED_LEN`] bytes. Ids are never truncated.
    pub fn derive(namespace: &[u8], owner: &OwnerId, id: Option<&str>) -> Result<Self, TypeError> {
        if let Some(id) = id {
            if id.len() > MAX_SEED_LEN {
                return Err(TypeError::SeedTooLong {
                    max: MAX_SEED_LEN,
                    actual: id.len(),
                });
            }
        }
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"quill-address-v1:");
        hasher.update(namespace);
        hasher.update(b":");
        hasher.update(owner.as_bytes());
        if let Some(id) = id {
            hasher.update(b":");
            hasher.update(id.as_bytes());
        }
        Ok(Self(*hasher.finalize().as_bytes()))
    }

    /// Create from a raw 32-byte value. Use `derive()` for production code.
    pub fn from_raw(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw 32-byte address.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Full hex-encoded string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string (64 hex characters).
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.short_hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
