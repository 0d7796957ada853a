use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a persisted, soft-deletable article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub contents: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// `None` while the post is active.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Whether the post has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Apply a patch on top of this post, keeping fields the patch leaves unset.
    pub fn merge(self, patch: PostPatch) -> PostDraft {
        PostDraft {
            id: Some(self.id),
            title: patch.title.unwrap_or(self.title),
            contents: patch.contents.unwrap_or(self.contents),
        }
    }
}

/// Input for creating a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub contents: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            contents: contents.into(),
        }
    }
}

/// Partial update - only the fields that are `Some` are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub contents: Option<String>,
}

/// What gets handed to `PostRepository::save`.
///
/// A draft without an `id` is inserted and receives one from the repository;
/// a draft with an `id` overwrites that row's title and contents. Timestamps
/// belong to the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub id: Option<Uuid>,
    pub title: String,
    pub contents: String,
}

impl From<NewPost> for PostDraft {
    fn from(new_post: NewPost) -> Self {
        Self {
            id: None,
            title: new_post.title,
            contents: new_post.contents,
        }
    }
}

/// Acknowledgement of a soft delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftDeleteResult {
    pub rows_affected: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        let now = Utc::now();
        Post {
            id: Uuid::new_v4(),
            title: "old".to_string(),
            contents: "c".to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let post = sample();
        let id = post.id;
        let draft = post.merge(PostPatch {
            title: Some("new".to_string()),
            contents: None,
        });

        assert_eq!(draft.id, Some(id));
        assert_eq!(draft.title, "new");
        assert_eq!(draft.contents, "c");
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let post = sample();
        let id = post.id;
        let draft = post.merge(PostPatch::default());

        assert_eq!(draft.id, Some(id));
        assert_eq!(draft.title, "old");
        assert_eq!(draft.contents, "c");
    }

    #[test]
    fn test_new_post_draft_has_no_id() {
        let draft = PostDraft::from(NewPost::new("t", "c"));
        assert!(draft.id.is_none());
        assert_eq!(draft.title, "t");
    }
}
