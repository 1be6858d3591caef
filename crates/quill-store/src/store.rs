use quill_chunk::ChunkConfig;
use quill_ledger::Ledger;
use quill_types::{Address, OwnerId, RecordKind};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::records::{AuthorProfileRecord, BlogRecord, CommentRecord};

/// The record store state machine.
///
/// Each record lives in one account at a deterministic address derived from
/// (namespace, owner, id). A record is Absent or Present; `create` moves it
/// to Present, `delete` back to Absent, and updates rewrite it in place.
/// Mutations require the signer to equal the stored owner; reads do not —
/// anyone who can derive an address may read it. Mutation integrity, not
/// confidentiality, is the goal.
///
/// Every method performs exactly one account operation against the ledger
/// (the host's single-writer-per-account guarantee is the only mutual
/// exclusion), except [`RecordStore::put_blog`], which is an explicitly
/// non-atomic convenience loop over single-slot calls.
pub struct RecordStore<L: Ledger> {
    ledger: L,
    config: ChunkConfig,
}

impl<L: Ledger> RecordStore<L> {
    /// Create a store over `ledger` with the default chunk configuration.
    pub fn new(ledger: L) -> Self {
        Self::with_config(ledger, ChunkConfig::default())
    }

    /// Create a store with an explicit chunk configuration.
    ///
    /// Writer and reader must share the configuration; changing it is a
    /// breaking schema change for existing accounts.
    pub fn with_config(ledger: L, config: ChunkConfig) -> Self {
        Self { ledger, config }
    }

    /// The underlying account ledger.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// The chunk configuration in effect.
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    fn address(
        &self,
        kind: RecordKind,
        owner: &OwnerId,
        id: Option<&str>,
    ) -> StoreResult<Address> {
        Ok(Address::derive(kind.namespace(), owner, id)?)
    }

    fn require_absent(&self, kind: RecordKind, address: &Address) -> StoreResult<()> {
        if self.ledger.account_exists(address)? {
            return Err(StoreError::AlreadyExists {
                kind,
                address: *address,
            });
        }
        Ok(())
    }

    fn load<T>(
        &self,
        kind: RecordKind,
        address: &Address,
        decode: fn(&Address, &[u8]) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let data = self
            .ledger
            .get_account(address)?
            .ok_or(StoreError::NotFound {
                kind,
                address: *address,
            })?;
        decode(address, &data)
    }

    fn authorize(
        kind: RecordKind,
        address: &Address,
        stored: &OwnerId,
        signer: &OwnerId,
    ) -> StoreResult<()> {
        if stored != signer {
            return Err(StoreError::Unauthorized {
                kind,
                address: *address,
                signer: *signer,
            });
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Blog
    // -----------------------------------------------------------------------

    /// Create a blog record, writing chunk slot 0.
    ///
    /// Returns the chunks still to be written; the caller issues one
    /// [`RecordStore::update_blog_chunk`] call per remaining slot (indices
    /// `1..`). Until then readers see a partially written content sequence.
    /// An empty return means the content fit in one chunk and the record is
    /// already complete.
    pub fn create_blog(
        &self,
        signer: &OwnerId,
        id: &str,
        title: &str,
        content: &str,
    ) -> StoreResult<Vec<String>> {
        let chunks = self.config.split(content)?;
        let address = self.address(RecordKind::Blog, signer, Some(id))?;
        self.require_absent(RecordKind::Blog, &address)?;

        let mut slots = vec![String::new(); self.config.max_slots()];
        slots[0] = chunks[0].clone();
        let record = BlogRecord {
            owner: *signer,
            id: id.to_string(),
            title: title.to_string(),
            content: slots,
        };
        self.ledger
            .write_account(&address, &record.to_account_bytes()?)?;
        debug!(
            owner = %signer,
            id,
            pending = chunks.len() - 1,
            "blog created"
        );
        Ok(chunks[1..].to_vec())
    }

    /// Overwrite one chunk slot of a blog, optionally rewriting the title.
    ///
    /// `last` marks the final chunk of the new content: the slot after
    /// `index` is then blanked to the sentinel, so content that shrank does
    /// not resurface its stale tail on read. Non-final calls leave higher
    /// slots untouched.
    pub fn update_blog_chunk(
        &self,
        signer: &OwnerId,
        id: &str,
        title: Option<&str>,
        chunk: &str,
        index: usize,
        last: bool,
    ) -> StoreResult<()> {
        self.config.check_slot(index)?;
        self.config.check_chunk(chunk)?;
        let address = self.address(RecordKind::Blog, signer, Some(id))?;
        let mut record = self.load(RecordKind::Blog, &address, BlogRecord::from_account_bytes)?;
        Self::authorize(RecordKind::Blog, &address, &record.owner, signer)?;

        record.content[index] = chunk.to_string();
        if last && index + 1 < self.config.max_slots() {
            record.content[index + 1] = String::new();
        }
        if let Some(title) = title {
            record.title = title.to_string();
        }
        self.ledger
            .write_account(&address, &record.to_account_bytes()?)?;
        debug!(owner = %signer, id, index, last, "blog chunk updated");
        Ok(())
    }

    /// Delete a blog record, reclaiming its account.
    ///
    /// The address becomes available for a fresh create under the same
    /// (owner, id).
    pub fn delete_blog(&self, signer: &OwnerId, id: &str) -> StoreResult<()> {
        let address = self.address(RecordKind::Blog, signer, Some(id))?;
        let record = self.load(RecordKind::Blog, &address, BlogRecord::from_account_bytes)?;
        Self::authorize(RecordKind::Blog, &address, &record.owner, signer)?;
        self.ledger.close_account(&address)?;
        debug!(owner = %signer, id, "blog deleted");
        Ok(())
    }

    /// Read a blog record. No authorization: any caller who knows the owner
    /// and id may read.
    pub fn read_blog(&self, owner: &OwnerId, id: &str) -> StoreResult<Option<BlogRecord>> {
        let address = self.address(RecordKind::Blog, owner, Some(id))?;
        match self.ledger.get_account(&address)? {
            Some(data) => Ok(Some(BlogRecord::from_account_bytes(&address, &data)?)),
            None => Ok(None),
        }
    }

    /// Write a blog's full title and content, creating the record if absent.
    ///
    /// Convenience driver over the single-slot protocol: one create or
    /// per-chunk update call per slot, in index order. **Not atomic** — a
    /// concurrent reader can observe any intermediate state, and a failure
    /// partway leaves the record partially written. Retrying the same call
    /// resumes the sequence.
    pub fn put_blog(
        &self,
        signer: &OwnerId,
        id: &str,
        title: &str,
        content: &str,
    ) -> StoreResult<()> {
        let chunks = self.config.split(content)?;
        let address = self.address(RecordKind::Blog, signer, Some(id))?;
        let final_index = chunks.len() - 1;
        if self.ledger.account_exists(&address)? {
            for (index, chunk) in chunks.iter().enumerate() {
                let title = (index == 0).then_some(title);
                self.update_blog_chunk(signer, id, title, chunk, index, index == final_index)?;
            }
        } else {
            let pending = self.create_blog(signer, id, title, content)?;
            for (offset, chunk) in pending.iter().enumerate() {
                let index = offset + 1;
                self.update_blog_chunk(signer, id, None, chunk, index, index == final_index)?;
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Comment
    // -----------------------------------------------------------------------

    /// Create a comment record. `blog_id` is stored as-is; referential
    /// existence is not checked.
    pub fn create_comment(
        &self,
        signer: &OwnerId,
        id: &str,
        blog_id: &str,
        content: &str,
    ) -> StoreResult<()> {
        let address = self.address(RecordKind::Comment, signer, Some(id))?;
        self.require_absent(RecordKind::Comment, &address)?;
        let record = CommentRecord {
            owner: *signer,
            id: id.to_string(),
            blog_id: blog_id.to_string(),
            content: content.to_string(),
        };
        self.ledger
            .write_account(&address, &record.to_account_bytes()?)?;
        debug!(owner = %signer, id, blog_id, "comment created");
        Ok(())
    }

    /// Overwrite a comment's content. Single whole-field write; no chunking.
    pub fn update_comment(&self, signer: &OwnerId, id: &str, content: &str) -> StoreResult<()> {
        let address = self.address(RecordKind::Comment, signer, Some(id))?;
        let mut record = self.load(
            RecordKind::Comment,
            &address,
            CommentRecord::from_account_bytes,
        )?;
        Self::authorize(RecordKind::Comment, &address, &record.owner, signer)?;
        record.content = content.to_string();
        self.ledger
            .write_account(&address, &record.to_account_bytes()?)?;
        debug!(owner = %signer, id, "comment updated");
        Ok(())
    }

    /// Delete a comment record.
    pub fn delete_comment(&self, signer: &OwnerId, id: &str) -> StoreResult<()> {
        let address = self.address(RecordKind::Comment, signer, Some(id))?;
        let record = self.load(
            RecordKind::Comment,
            &address,
            CommentRecord::from_account_bytes,
        )?;
        Self::authorize(RecordKind::Comment, &address, &record.owner, signer)?;
        self.ledger.close_account(&address)?;
        debug!(owner = %signer, id, "comment deleted");
        Ok(())
    }

    /// Read a comment record. No authorization.
    pub fn read_comment(&self, owner: &OwnerId, id: &str) -> StoreResult<Option<CommentRecord>> {
        let address = self.address(RecordKind::Comment, owner, Some(id))?;
        match self.ledger.get_account(&address)? {
            Some(data) => Ok(Some(CommentRecord::from_account_bytes(&address, &data)?)),
            None => Ok(None),
        }
    }

    // -----------------------------------------------------------------------
    // Author profile (singleton per owner)
    // -----------------------------------------------------------------------

    /// Create the signer's author profile. One per owner; no id dimension.
    pub fn create_author_profile(&self, signer: &OwnerId, intro: &str) -> StoreResult<()> {
        let address = self.address(RecordKind::AuthorProfile, signer, None)?;
        self.require_absent(RecordKind::AuthorProfile, &address)?;
        let record = AuthorProfileRecord {
            owner: *signer,
            intro: intro.to_string(),
        };
        self.ledger
            .write_account(&address, &record.to_account_bytes()?)?;
        debug!(owner = %signer, "author profile created");
        Ok(())
    }

    /// Overwrite the signer's author profile intro.
    pub fn update_author_profile(&self, signer: &OwnerId, intro: &str) -> StoreResult<()> {
        let address = self.address(RecordKind::AuthorProfile, signer, None)?;
        let mut record = self.load(
            RecordKind::AuthorProfile,
            &address,
            AuthorProfileRecord::from_account_bytes,
        )?;
        Self::authorize(RecordKind::AuthorProfile, &address, &record.owner, signer)?;
        record.intro = intro.to_string();
        self.ledger
            .write_account(&address, &record.to_account_bytes()?)?;
        debug!(owner = %signer, "author profile updated");
        Ok(())
    }

    /// Delete the signer's author profile.
    pub fn delete_author_profile(&self, signer: &OwnerId) -> StoreResult<()> {
        let address = self.address(RecordKind::AuthorProfile, signer, None)?;
        let record = self.load(
            RecordKind::AuthorProfile,
            &address,
            AuthorProfileRecord::from_account_bytes,
        )?;
        Self::authorize(RecordKind::AuthorProfile, &address, &record.owner, signer)?;
        self.ledger.close_account(&address)?;
        debug!(owner = %signer, "author profile deleted");
        Ok(())
    }

    /// Read an owner's author profile. No authorization.
    pub fn read_author_profile(
        &self,
        owner: &OwnerId,
    ) -> StoreResult<Option<AuthorProfileRecord>> {
        let address = self.address(RecordKind::AuthorProfile, owner, None)?;
        match self.ledger.get_account(&address)? {
            Some(data) => Ok(Some(AuthorProfileRecord::from_account_bytes(
                &address, &data,
            )?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_chunk::ChunkError;
    use quill_ledger::InMemoryLedger;
    use quill_types::{TypeError, MAX_SEED_LEN};

    fn store() -> RecordStore<InMemoryLedger> {
        RecordStore::new(InMemoryLedger::new())
    }

    fn tiny_store() -> RecordStore<InMemoryLedger> {
        // Capacity 5 forces multi-chunk content in tests.
        RecordStore::with_config(InMemoryLedger::new(), ChunkConfig::new(5, 4).unwrap())
    }

    fn new_id() -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }

    // -----------------------------------------------------------------------
    // Blog lifecycle
    // -----------------------------------------------------------------------

    #[test]
    fn create_then_read_blog() {
        let store = store();
        let owner = OwnerId::ephemeral();
        let id = new_id();

        let pending = store
            .create_blog(&owner, &id, "Here's title", "Here's content")
            .unwrap();
        assert!(pending.is_empty()); // fits in one chunk

        let blog = store.read_blog(&owner, &id).unwrap().expect("should exist");
        assert_eq!(blog.title, "Here's title");
        assert_eq!(blog.content_text(), "Here's content");
        assert_eq!(blog.id, id);
        assert_eq!(blog.owner, owner);
        assert!(blog.is_complete());
    }

    #[test]
    fn chunked_create_round_trip() {
        let store = tiny_store();
        let owner = OwnerId::ephemeral();
        let id = new_id();

        let pending = store
            .create_blog(&owner, &id, "T", "Here's content")
            .unwrap();
        assert_eq!(pending, vec!["s con", "tent"]);

        // Reader between calls sees the partially written sequence.
        let partial = store.read_blog(&owner, &id).unwrap().unwrap();
        assert_eq!(partial.content_text(), "Here'");

        for (offset, chunk) in pending.iter().enumerate() {
            let index = offset + 1;
            store
                .update_blog_chunk(&owner, &id, None, chunk, index, index == pending.len())
                .unwrap();
        }

        let blog = store.read_blog(&owner, &id).unwrap().unwrap();
        assert_eq!(blog.content_text(), "Here's content");
        assert!(blog.is_complete());
    }

    #[test]
    fn put_blog_creates_and_updates() {
        let store = store();
        let owner = OwnerId::ephemeral();
        let id = new_id();

        store
            .put_blog(&owner, &id, "Here's original title", "Here's original content")
            .unwrap();
        let blog = store.read_blog(&owner, &id).unwrap().unwrap();
        assert_eq!(blog.title, "Here's original title");
        assert_eq!(blog.content_text(), "Here's original content");

        store
            .put_blog(&owner, &id, "Here's new title", "Here's new content")
            .unwrap();
        let blog = store.read_blog(&owner, &id).unwrap().unwrap();
        assert_eq!(blog.title, "Here's new title");
        assert_eq!(blog.content_text(), "Here's new content");
    }

    #[test]
    fn shrinking_update_blanks_the_stale_tail() {
        let store = tiny_store();
        let owner = OwnerId::ephemeral();
        let id = new_id();

        store.put_blog(&owner, &id, "T", "aaaaabbbbbccccc").unwrap();
        let long = store.read_blog(&owner, &id).unwrap().unwrap();
        assert_eq!(long.content_text(), "aaaaabbbbbccccc");

        store.put_blog(&owner, &id, "T", "short").unwrap();
        let short = store.read_blog(&owner, &id).unwrap().unwrap();
        assert_eq!(short.content_text(), "short");
        assert!(short.is_complete());
        // Stale bytes remain in slot 2 behind the sentinel; join never
        // reaches them.
        assert_eq!(short.content[2], "ccccc");
    }

    #[test]
    fn growing_update_uses_more_slots() {
        let store = tiny_store();
        let owner = OwnerId::ephemeral();
        let id = new_id();

        store.put_blog(&owner, &id, "T", "tiny").unwrap();
        store.put_blog(&owner, &id, "T", "aaaaabbbbbcc").unwrap();
        let blog = store.read_blog(&owner, &id).unwrap().unwrap();
        assert_eq!(blog.content_text(), "aaaaabbbbbcc");
    }

    #[test]
    fn empty_content_round_trips() {
        let store = store();
        let owner = OwnerId::ephemeral();
        let id = new_id();

        store.put_blog(&owner, &id, "T", "").unwrap();
        let blog = store.read_blog(&owner, &id).unwrap().unwrap();
        assert_eq!(blog.content_text(), "");
        assert!(blog.is_complete());
    }

    #[test]
    fn create_existing_blog_fails() {
        let store = store();
        let owner = OwnerId::ephemeral();
        let id = new_id();

        store.create_blog(&owner, &id, "T", "c").unwrap();
        let err = store.create_blog(&owner, &id, "T2", "c2").unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists { .. }));
    }

    #[test]
    fn delete_then_read_then_recreate() {
        let store = store();
        let owner = OwnerId::ephemeral();
        let id = new_id();

        store.put_blog(&owner, &id, "T", "old content").unwrap();
        store.delete_blog(&owner, &id).unwrap();
        assert!(store.read_blog(&owner, &id).unwrap().is_none());

        // Same (owner, id) is creatable again, independent of the old record.
        store.put_blog(&owner, &id, "T2", "new content").unwrap();
        let blog = store.read_blog(&owner, &id).unwrap().unwrap();
        assert_eq!(blog.title, "T2");
        assert_eq!(blog.content_text(), "new content");
    }

    #[test]
    fn update_absent_blog_fails() {
        let store = store();
        let owner = OwnerId::ephemeral();
        let err = store
            .update_blog_chunk(&owner, "missing", None, "x", 0, true)
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn delete_absent_blog_fails() {
        let store = store();
        let owner = OwnerId::ephemeral();
        let err = store.delete_blog(&owner, "missing").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn oversized_content_is_rejected_before_any_write() {
        let store = tiny_store(); // 5 bytes * 4 slots = 20 max
        let owner = OwnerId::ephemeral();
        let id = new_id();

        let err = store
            .create_blog(&owner, &id, "T", &"x".repeat(21))
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::ContentTooLarge(ChunkError::ContentTooLarge { .. })
        ));
        assert!(store.read_blog(&owner, &id).unwrap().is_none());
    }

    #[test]
    fn oversized_chunk_is_rejected() {
        let store = tiny_store();
        let owner = OwnerId::ephemeral();
        let id = new_id();
        store.create_blog(&owner, &id, "T", "c").unwrap();

        let err = store
            .update_blog_chunk(&owner, &id, None, "toolong", 1, true)
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::ContentTooLarge(ChunkError::ChunkTooLarge { .. })
        ));
    }

    #[test]
    fn out_of_range_slot_is_rejected() {
        let store = tiny_store(); // 4 slots
        let owner = OwnerId::ephemeral();
        let id = new_id();
        store.create_blog(&owner, &id, "T", "c").unwrap();

        let err = store
            .update_blog_chunk(&owner, &id, None, "x", 4, true)
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::ContentTooLarge(ChunkError::SlotOutOfRange { .. })
        ));
    }

    #[test]
    fn oversized_id_is_rejected() {
        let store = store();
        let owner = OwnerId::ephemeral();
        let long_id = "x".repeat(MAX_SEED_LEN + 1);
        let err = store.create_blog(&owner, &long_id, "T", "c").unwrap_err();
        assert!(matches!(
            err,
            StoreError::MalformedSeed(TypeError::SeedTooLong { .. })
        ));
    }

    // -----------------------------------------------------------------------
    // Authorization
    // -----------------------------------------------------------------------

    #[test]
    fn foreign_signer_cannot_update_or_delete() {
        let store = store();
        let owner = OwnerId::ephemeral();
        let intruder = OwnerId::ephemeral();
        let id = new_id();

        store.put_blog(&owner, &id, "T", "content").unwrap();

        // The intruder's derived address differs, so their calls land on an
        // absent account.
        let err = store
            .update_blog_chunk(&intruder, &id, None, "x", 0, true)
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        let err = store.delete_blog(&intruder, &id).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));

        let blog = store.read_blog(&owner, &id).unwrap().unwrap();
        assert_eq!(blog.content_text(), "content");
    }

    #[test]
    fn stored_owner_mismatch_is_unauthorized() {
        // Defense in depth: if a record somehow sits at an address the
        // signer can name, the stored owner still gates the mutation.
        let store = store();
        let owner = OwnerId::ephemeral();
        let intruder = OwnerId::ephemeral();
        let id = new_id();

        store.put_blog(&owner, &id, "T", "content").unwrap();

        // Plant the owner's record at the intruder's derived address.
        let victim_address =
            Address::derive(RecordKind::Blog.namespace(), &owner, Some(id.as_str())).unwrap();
        let intruder_address =
            Address::derive(RecordKind::Blog.namespace(), &intruder, Some(id.as_str())).unwrap();
        let data = store.ledger().get_account(&victim_address).unwrap().unwrap();
        store
            .ledger()
            .write_account(&intruder_address, &data)
            .unwrap();

        let err = store
            .update_blog_chunk(&intruder, &id, None, "x", 0, true)
            .unwrap_err();
        assert!(matches!(err, StoreError::Unauthorized { .. }));
        let err = store.delete_blog(&intruder, &id).unwrap_err();
        assert!(matches!(err, StoreError::Unauthorized { .. }));

        // The planted copy is unchanged.
        let planted = store
            .ledger()
            .get_account(&intruder_address)
            .unwrap()
            .unwrap();
        assert_eq!(planted, data);
    }

    // -----------------------------------------------------------------------
    // Comment
    // -----------------------------------------------------------------------

    #[test]
    fn comment_lifecycle() {
        let store = store();
        let owner = OwnerId::ephemeral();
        let id = new_id();
        let blog_id = new_id();

        store
            .create_comment(&owner, &id, &blog_id, "Here's a comment")
            .unwrap();
        let comment = store.read_comment(&owner, &id).unwrap().unwrap();
        assert_eq!(comment.content, "Here's a comment");
        assert_eq!(comment.blog_id, blog_id);

        store
            .update_comment(&owner, &id, "Here's an updated comment")
            .unwrap();
        let comment = store.read_comment(&owner, &id).unwrap().unwrap();
        assert_eq!(comment.content, "Here's an updated comment");

        store.delete_comment(&owner, &id).unwrap();
        assert!(store.read_comment(&owner, &id).unwrap().is_none());
    }

    #[test]
    fn comment_blog_id_is_not_validated() {
        let store = store();
        let owner = OwnerId::ephemeral();
        // No blog with this id exists; the create still succeeds.
        store
            .create_comment(&owner, &new_id(), "dangling-blog", "hello")
            .unwrap();
    }

    #[test]
    fn comment_and_blog_with_same_id_do_not_collide() {
        let store = store();
        let owner = OwnerId::ephemeral();
        let id = new_id();

        store.put_blog(&owner, &id, "T", "blog body").unwrap();
        store.create_comment(&owner, &id, "b", "comment body").unwrap();

        assert_eq!(
            store.read_blog(&owner, &id).unwrap().unwrap().content_text(),
            "blog body"
        );
        assert_eq!(
            store.read_comment(&owner, &id).unwrap().unwrap().content,
            "comment body"
        );
    }

    // -----------------------------------------------------------------------
    // Author profile
    // -----------------------------------------------------------------------

    #[test]
    fn author_profile_lifecycle() {
        let store = store();
        let owner = OwnerId::ephemeral();

        store
            .create_author_profile(&owner, "Here's an introduction")
            .unwrap();
        let profile = store.read_author_profile(&owner).unwrap().unwrap();
        assert_eq!(profile.intro, "Here's an introduction");

        store
            .update_author_profile(&owner, "Here's an updated introduction")
            .unwrap();
        let profile = store.read_author_profile(&owner).unwrap().unwrap();
        assert_eq!(profile.intro, "Here's an updated introduction");

        store.delete_author_profile(&owner).unwrap();
        assert!(store.read_author_profile(&owner).unwrap().is_none());
    }

    #[test]
    fn author_profile_is_singleton_per_owner() {
        let store = store();
        let owner = OwnerId::ephemeral();

        store.create_author_profile(&owner, "first").unwrap();
        let err = store.create_author_profile(&owner, "second").unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists { .. }));

        // A different owner has an independent singleton.
        let other = OwnerId::ephemeral();
        store.create_author_profile(&other, "other intro").unwrap();
        assert_eq!(
            store.read_author_profile(&owner).unwrap().unwrap().intro,
            "first"
        );
        assert_eq!(
            store.read_author_profile(&other).unwrap().unwrap().intro,
            "other intro"
        );
    }
}
