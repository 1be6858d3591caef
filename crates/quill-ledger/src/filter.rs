/// Byte-offset equality predicate for account scans.
///
/// A filter matches an account when the account bytes at `offset` equal
/// `bytes` exactly. Accounts shorter than `offset + bytes.len()` never
/// match. Multiple filters are combined conjunctively by
/// [`ScanFilter::matches_all`] — a discriminator clause plus an owner
/// clause is the usual pairing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanFilter {
    offset: usize,
    bytes: Vec<u8>,
}

impl ScanFilter {
    /// Filter on raw bytes at a fixed offset.
    pub fn memcmp(offset: usize, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            offset,
            bytes: bytes.into(),
        }
    }

    /// The byte offset this filter compares at.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The bytes this filter compares against.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Whether `data` matches this filter.
    pub fn matches(&self, data: &[u8]) -> bool {
        data.get(self.offset..self.offset + self.bytes.len())
            .is_some_and(|window| window == self.bytes)
    }

    /// Whether `data` matches every filter in `filters`.
    pub fn matches_all(filters: &[ScanFilter], data: &[u8]) -> bool {
        filters.iter().all(|f| f.matches(data))
    }
}
