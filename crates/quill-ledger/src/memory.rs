use std::collections::HashMap;
use std::sync::RwLock;

use quill_types::Address;
use tracing::trace;

use crate::error::LedgerResult;
use crate::filter::ScanFilter;
use crate::traits::Ledger;

/// In-memory, HashMap-based account ledger.
///
/// Intended for tests and embedding. All accounts are held in memory behind
/// a `RwLock` for safe concurrent access. Account bytes are cloned on read.
pub struct InMemoryLedger {
    accounts: RwLock<HashMap<Address, Vec<u8>>>,
}

impl InMemoryLedger {
    /// Create a new empty ledger.
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// Number of live accounts.
    pub fn len(&self) -> usize {
        self.accounts.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no accounts exist.
    pub fn is_empty(&self) -> bool {
        self.accounts.read().expect("lock poisoned").is_empty()
    }

    /// Total bytes across all accounts.
    pub fn total_bytes(&self) -> u64 {
        self.accounts
            .read()
            .expect("lock poisoned")
            .values()
            .map(|data| data.len() as u64)
            .sum()
    }

    /// Remove all accounts.
    pub fn clear(&self) {
        self.accounts.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger for InMemoryLedger {
    fn get_account(&self, address: &Address) -> LedgerResult<Option<Vec<u8>>> {
        let map = self.accounts.read().expect("lock poisoned");
        Ok(map.get(address).cloned())
    }

    fn write_account(&self, address: &Address, data: &[u8]) -> LedgerResult<()> {
        let mut map = self.accounts.write().expect("lock poisoned");
        map.insert(*address, data.to_vec());
        Ok(())
    }

    fn close_account(&self, address: &Address) -> LedgerResult<bool> {
        let mut map = self.accounts.write().expect("lock poisoned");
        Ok(map.remove(address).is_some())
    }

    fn account_exists(&self, address: &Address) -> LedgerResult<bool> {
        let map = self.accounts.read().expect("lock poisoned");
        Ok(map.contains_key(address))
    }

    fn scan_accounts(&self, filters: &[ScanFilter]) -> LedgerResult<Vec<(Address, Vec<u8>)>> {
        let map = self.accounts.read().expect("lock poisoned");
        let matched: Vec<(Address, Vec<u8>)> = map
            .iter()
            .filter(|(_, data)| ScanFilter::matches_all(filters, data))
            .map(|(addr, data)| (*addr, data.clone()))
            .collect();
        trace!(
            scanned = map.len(),
            matched = matched.len(),
            "account scan"
        );
        Ok(matched)
    }
}

impl std::fmt::Debug for InMemoryLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryLedger")
            .field("account_count", &count)
            .finish()
    }
}
