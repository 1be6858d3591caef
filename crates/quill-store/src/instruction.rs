use serde::{Deserialize, Serialize};

use quill_ledger::Ledger;
use quill_types::{OwnerId, RecordKind};

use crate::error::StoreResult;
use crate::store::RecordStore;

/// One state transition against one record account.
///
/// `Instruction` is the submission boundary: an external transport hands the
/// store "apply mutation M, signed by K" and the store applies exactly one
/// transition per instruction. Multi-chunk content is written as a create
/// followed by one `UpdateBlogChunk` per remaining slot — the sequence is
/// the caller's to drive and to resume.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    CreateBlog {
        id: String,
        title: String,
        content: String,
    },
    UpdateBlogChunk {
        id: String,
        title: Option<String>,
        chunk: String,
        index: usize,
        last: bool,
    },
    DeleteBlog {
        id: String,
    },
    CreateComment {
        id: String,
        blog_id: String,
        content: String,
    },
    UpdateComment {
        id: String,
        content: String,
    },
    DeleteComment {
        id: String,
    },
    CreateAuthorProfile {
        intro: String,
    },
    UpdateAuthorProfile {
        intro: String,
    },
    DeleteAuthorProfile,
}

impl Instruction {
    /// The record kind this instruction targets.
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::CreateBlog { .. } | Self::UpdateBlogChunk { .. } | Self::DeleteBlog { .. } => {
                RecordKind::Blog
            }
            Self::CreateComment { .. }
            | Self::UpdateComment { .. }
            | Self::DeleteComment { .. } => RecordKind::Comment,
            Self::CreateAuthorProfile { .. }
            | Self::UpdateAuthorProfile { .. }
            | Self::DeleteAuthorProfile => RecordKind::AuthorProfile,
        }
    }
}

impl<L: Ledger> RecordStore<L> {
    /// Apply one instruction signed by `signer`.
    ///
    /// Returns the chunks a `CreateBlog` still needs written (empty for
    /// every other instruction); the caller turns each into an
    /// `UpdateBlogChunk` submission.
    pub fn submit(&self, signer: &OwnerId, instruction: Instruction) -> StoreResult<Vec<String>> {
        match instruction {
            Instruction::CreateBlog { id, title, content } => {
                self.create_blog(signer, &id, &title, &content)
            }
            Instruction::UpdateBlogChunk {
                id,
                title,
                chunk,
                index,
                last,
            } => {
                self.update_blog_chunk(signer, &id, title.as_deref(), &chunk, index, last)?;
                Ok(Vec::new())
            }
            Instruction::DeleteBlog { id } => {
                self.delete_blog(signer, &id)?;
                Ok(Vec::new())
            }
            Instruction::CreateComment {
                id,
                blog_id,
                content,
            } => {
                self.create_comment(signer, &id, &blog_id, &content)?;
                Ok(Vec::new())
            }
            Instruction::UpdateComment { id, content } => {
                self.update_comment(signer, &id, &content)?;
                Ok(Vec::new())
            }
            Instruction::DeleteComment { id } => {
                self.delete_comment(signer, &id)?;
                Ok(Vec::new())
            }
            Instruction::CreateAuthorProfile { intro } => {
                self.create_author_profile(signer, &intro)?;
                Ok(Vec::new())
            }
            Instruction::UpdateAuthorProfile { intro } => {
                self.update_author_profile(signer, &intro)?;
                Ok(Vec::new())
            }
            Instruction::DeleteAuthorProfile => {
                self.delete_author_profile(signer)?;
                Ok(Vec::new())
            }
        }
    }
}
