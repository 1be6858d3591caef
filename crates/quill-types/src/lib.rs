//! Foundation types for the Quill record ledger.
//!
//! This crate provides the identity and addressing primitives used by every
//! other Quill crate.
//!
//! # Key Types
//!
//! - [`OwnerId`] — Opaque 32-byte owner identity; the sole mutation authority
//!   for the records it creates
//! - [`Address`] — Deterministic account address derived from
//!   (namespace, owner, record id)
//! - [`RecordKind`] — Closed union of record families (blog, comment, author
//!   profile) with their namespaces and account discriminators

pub mod address;
pub mod error;
pub mod kind;
pub mod owner;

pub use address::{Address, MAX_SEED_LEN};
pub use error::TypeError;
pub use kind::{RecordKind, DISCRIMINATOR_LEN};
pub use owner::OwnerId;
