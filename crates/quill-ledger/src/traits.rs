use quill_types::Address;

use crate::error::LedgerResult;
use crate::filter::ScanFilter;

/// The host-ledger account boundary.
///
/// All implementations must satisfy these invariants:
/// - Every call applies to exactly one account; the host serializes writers
///   per account, so no locking happens at this layer.
/// - Account bytes are opaque: the ledger never interprets them.
/// - Reads of a missing account are `Ok(None)`, never an error.
/// - Storage failures are propagated, never silently ignored.
pub trait Ledger: Send + Sync {
    /// Read the bytes of the account at `address`.
    ///
    /// Returns `Ok(None)` if no account exists at the address.
    fn get_account(&self, address: &Address) -> LedgerResult<Option<Vec<u8>>>;

    /// Create or overwrite the account at `address` with `data`.
    fn write_account(&self, address: &Address, data: &[u8]) -> LedgerResult<()>;

    /// Close the account at `address`, reclaiming its storage.
    ///
    /// Returns `true` if the account existed. The address becomes available
    /// for a fresh write afterwards.
    fn close_account(&self, address: &Address) -> LedgerResult<bool>;

    /// Whether an account exists at `address`.
    fn account_exists(&self, address: &Address) -> LedgerResult<bool> {
        Ok(self.get_account(address)?.is_some())
    }

    /// Linear scan over all accounts, keeping those matching every filter.
    ///
    /// Results are unordered and finite; there are no pagination guarantees,
    /// and snapshot consistency across concurrent writers is whatever the
    /// backend offers.
    fn scan_accounts(&self, filters: &[ScanFilter]) -> LedgerResult<Vec<(Address, Vec<u8>)>>;
}
