//! Account storage boundary for the Quill record ledger.
//!
//! The host ledger is an external collaborator: it provides fixed-address,
//! size-bounded accounts, a single-writer-per-account transaction guarantee,
//! and a structural scan primitive. This crate defines that boundary as the
//! [`Ledger`] trait and ships [`InMemoryLedger`] for tests and embedding.
//!
//! # Design Rules
//!
//! 1. One account per call: every write or close touches exactly one address.
//! 2. The ledger never interprets account bytes — record semantics live above.
//! 3. Mutual exclusion per account is the host's guarantee, not reimplemented
//!    here; there is no cross-call transaction.
//! 4. Scans are linear and structurally filtered (offset + bytes equality);
//!    snapshot consistency is whatever the backend offers.
//! 5. All storage errors are propagated, never silently ignored.

pub mod error;
pub mod filter;
pub mod memory;
pub mod traits;

pub use error::{LedgerError, LedgerResult};
pub use filter::ScanFilter;
pub use memory::InMemoryLedger;
pub use traits::Ledger;
