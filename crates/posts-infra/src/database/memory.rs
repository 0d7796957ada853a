//! In-memory post repository - used when no database is configured.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use posts_core::domain::{Post, PostDraft, SoftDeleteResult};
use posts_core::error::RepoError;
use posts_core::ports::PostRepository;

/// In-memory post store using a Vec with async RwLock.
///
/// Posts are kept in insertion order. Note: data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn save(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let now = Utc::now();
        let mut store = self.store.write().await;

        if let Some(id) = draft.id {
            if let Some(existing) = store.iter_mut().find(|p| p.id == id) {
                existing.title = draft.title;
                existing.contents = draft.contents;
                existing.updated_at = now;
                return Ok(existing.clone());
            }
        }

        let post = Post {
            id: draft.id.unwrap_or_else(Uuid::new_v4),
            title: draft.title,
            contents: draft.contents,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        store.push(post.clone());
        Ok(post)
    }

    async fn find(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn find_one(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|p| p.id == id).cloned())
    }

    async fn soft_delete(&self, id: Uuid) -> Result<SoftDeleteResult, RepoError> {
        let mut store = self.store.write().await;

        let rows_affected = match store
            .iter_mut()
            .find(|p| p.id == id && p.deleted_at.is_none())
        {
            Some(post) => {
                post.deleted_at = Some(Utc::now());
                1
            }
            None => 0,
        };

        Ok(SoftDeleteResult { rows_affected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posts_core::domain::NewPost;

    #[tokio::test]
    async fn test_save_assigns_id_and_timestamps() {
        let repo = InMemoryPostRepository::new();
        let post = repo
            .save(PostDraft::from(NewPost::new("title", "body")))
            .await
            .unwrap();

        assert_eq!(post.created_at, post.updated_at);
        assert_eq!(repo.find_one(post.id).await.unwrap(), Some(post));
    }

    #[tokio::test]
    async fn test_save_with_id_overwrites_fields_only() {
        let repo = InMemoryPostRepository::new();
        let post = repo
            .save(PostDraft::from(NewPost::new("title", "body")))
            .await
            .unwrap();

        let updated = repo
            .save(PostDraft {
                id: Some(post.id),
                title: "renamed".to_string(),
                contents: "body".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.id, post.id);
        assert_eq!(updated.title, "renamed");
        assert_eq!(updated.created_at, post.created_at);
        assert_eq!(repo.find().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_soft_delete_keeps_row_and_first_timestamp() {
        let repo = InMemoryPostRepository::new();
        let post = repo
            .save(PostDraft::from(NewPost::new("title", "body")))
            .await
            .unwrap();

        let ack = repo.soft_delete(post.id).await.unwrap();
        assert_eq!(ack.rows_affected, 1);
        let deleted_at = repo.find_one(post.id).await.unwrap().unwrap().deleted_at;
        assert!(deleted_at.is_some());

        let again = repo.soft_delete(post.id).await.unwrap();
        assert_eq!(again.rows_affected, 0);
        let stored = repo.find_one(post.id).await.unwrap().unwrap();
        assert_eq!(stored.deleted_at, deleted_at);
    }

    #[tokio::test]
    async fn test_soft_delete_unknown_id_affects_nothing() {
        let repo = InMemoryPostRepository::new();
        let ack = repo.soft_delete(Uuid::new_v4()).await.unwrap();
        assert_eq!(ack.rows_affected, 0);
    }
}
