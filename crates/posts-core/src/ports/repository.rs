use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostDraft, SoftDeleteResult};
use crate::error::RepoError;

/// Post repository - the persistence capability `PostService` is built on.
///
/// Reads are not scoped to active rows: soft-deleted posts come back with
/// `deleted_at` populated.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a draft without an id, or overwrite the row a draft's id names.
    async fn save(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Every stored post, in storage order.
    async fn find(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its unique ID.
    async fn find_one(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Stamp `deleted_at` on the row without removing it.
    ///
    /// Rows that already carry a `deleted_at` keep it and are not counted.
    async fn soft_delete(&self, id: Uuid) -> Result<SoftDeleteResult, RepoError>;
}
