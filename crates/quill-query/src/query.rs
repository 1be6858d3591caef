use quill_ledger::{Ledger, ScanFilter};
use quill_store::{
    AuthorProfileRecord, BlogRecord, CommentRecord, Record, StoreResult, OWNER_OFFSET,
};
use quill_types::{Address, OwnerId, RecordKind};
use tracing::trace;

use crate::error::QueryResult;

fn scan_kind<L, T>(
    ledger: &L,
    kind: RecordKind,
    owner: Option<&OwnerId>,
    decode: fn(&Address, &[u8]) -> StoreResult<T>,
) -> QueryResult<Vec<T>>
where
    L: Ledger,
{
    let mut filters = vec![ScanFilter::memcmp(0, kind.discriminator().to_vec())];
    if let Some(owner) = owner {
        filters.push(ScanFilter::memcmp(OWNER_OFFSET, owner.as_bytes().to_vec()));
    }
    let hits = ledger.scan_accounts(&filters)?;
    trace!(kind = %kind, matched = hits.len(), "record scan");
    hits.iter()
        .map(|(address, data)| decode(address, data).map_err(Into::into))
        .collect()
}

/// All blog records on the ledger, unordered.
pub fn list_blogs<L: Ledger>(ledger: &L) -> QueryResult<Vec<BlogRecord>> {
    scan_kind(ledger, RecordKind::Blog, None, BlogRecord::from_account_bytes)
}

/// All blog records stored under `owner`, unordered.
pub fn list_blogs_by_owner<L: Ledger>(ledger: &L, owner: &OwnerId) -> QueryResult<Vec<BlogRecord>> {
    scan_kind(
        ledger,
        RecordKind::Blog,
        Some(owner),
        BlogRecord::from_account_bytes,
    )
}

/// All comment records on the ledger, unordered.
pub fn list_comments<L: Ledger>(ledger: &L) -> QueryResult<Vec<CommentRecord>> {
    scan_kind(
        ledger,
        RecordKind::Comment,
        None,
        CommentRecord::from_account_bytes,
    )
}

/// All comment records stored under `owner`, unordered.
pub fn list_comments_by_owner<L: Ledger>(
    ledger: &L,
    owner: &OwnerId,
) -> QueryResult<Vec<CommentRecord>> {
    scan_kind(
        ledger,
        RecordKind::Comment,
        Some(owner),
        CommentRecord::from_account_bytes,
    )
}

/// All comments referencing `blog_id`, across owners.
///
/// `blog_id` sits behind the variable-length `id` field, so this decodes
/// every comment and filters in memory rather than structurally.
pub fn list_comments_for_blog<L: Ledger>(
    ledger: &L,
    blog_id: &str,
) -> QueryResult<Vec<CommentRecord>> {
    let mut comments = list_comments(ledger)?;
    comments.retain(|c| c.blog_id == blog_id);
    Ok(comments)
}

/// Every record stored under `owner`, across all kinds, unordered.
///
/// The owner bytes sit at the same fixed offset for every record kind, so a
/// single owner filter suffices; each hit is then dispatched on its
/// discriminator into the [`Record`] union.
pub fn list_records_by_owner<L: Ledger>(ledger: &L, owner: &OwnerId) -> QueryResult<Vec<Record>> {
    let filters = [ScanFilter::memcmp(OWNER_OFFSET, owner.as_bytes().to_vec())];
    let hits = ledger.scan_accounts(&filters)?;
    trace!(owner = %owner, matched = hits.len(), "owner scan");
    hits.iter()
        .map(|(address, data)| Record::from_account_bytes(address, data).map_err(Into::into))
        .collect()
}

/// The author profile of `owner`, if one exists.
pub fn author_profile_of<L: Ledger>(
    ledger: &L,
    owner: &OwnerId,
) -> QueryResult<Option<AuthorProfileRecord>> {
    let mut profiles = scan_kind(
        ledger,
        RecordKind::AuthorProfile,
        Some(owner),
        AuthorProfileRecord::from_account_bytes,
    )?;
    Ok(profiles.pop())
}
