//! Owner-scoped structural queries for the Quill record ledger.
//!
//! Listing an owner's records needs no per-record addresses: every account
//! carries its kind discriminator at offset 0 and its owner bytes at a fixed
//! offset behind it, so a linear ledger scan with two byte-equality filters
//! finds everything. Results are unordered and snapshot consistency is
//! whatever the underlying scan offers — not atomic across concurrent
//! writers.
//!
//! The one filter that cannot be structural is comment-by-blog: `blog_id`
//! sits behind a variable-length field, so [`list_comments_for_blog`]
//! decodes first and filters in memory.

pub mod error;
pub mod query;

pub use error::{QueryError, QueryResult};
pub use query::{
    author_profile_of, list_blogs, list_blogs_by_owner, list_comments, list_comments_by_owner,
    list_comments_for_blog, list_records_by_owner,
};
