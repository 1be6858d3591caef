//! Owner-scoped record store for the Quill record ledger.
//!
//! This crate is the heart of Quill. It provides:
//! - Record types (blog, comment, author profile) with a discriminator-tagged
//!   account byte codec
//! - The `RecordStore` state machine: create / update / delete / read with
//!   owner authorization and the chunk-indexed write protocol for blog content
//! - The closed [`Instruction`] union and [`RecordStore::submit`] entry point
//!
//! # The chunked write protocol
//!
//! A blog's content lives in a fixed-size sequence of chunk slots. `create`
//! writes slot 0 and returns the chunks still to be written; the caller
//! issues one `update_blog_chunk` call per remaining slot. The sequence is
//! **not atomic**: a reader between calls sees a partially written record,
//! and a caller that stops partway leaves the record in that state until a
//! corrective update completes it. Completion is detectable with
//! [`BlogRecord::is_complete`]; resumption is just issuing the remaining
//! chunk calls.

pub mod error;
pub mod instruction;
pub mod records;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use instruction::Instruction;
pub use records::{AuthorProfileRecord, BlogRecord, CommentRecord, Record, OWNER_OFFSET};
pub use store::RecordStore;
