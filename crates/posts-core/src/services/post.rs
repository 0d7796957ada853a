//! Post use-case service.
//!
//! Every operation logs its outcome at debug level and hands failures back
//! untouched; there is no retry or recovery here.

use std::fmt::Debug;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{NewPost, Post, PostDraft, PostPatch, SoftDeleteResult};
use crate::error::DomainError;
use crate::ports::PostRepository;

const ENTITY_TYPE: &str = "Post";

/// Business logic for the Post resource.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Persist a new post and return it with its assigned id.
    pub async fn create(&self, input: NewPost) -> Result<Post, DomainError> {
        let result = self
            .repo
            .save(PostDraft::from(input))
            .await
            .map_err(DomainError::from);
        log_outcome("create", result)
    }

    /// All posts known to the repository, soft-deleted ones included.
    pub async fn find_all(&self) -> Result<Vec<Post>, DomainError> {
        let result = self.repo.find().await.map_err(DomainError::from);
        log_outcome("find_all", result)
    }

    pub async fn find_one(&self, id: Uuid) -> Result<Post, DomainError> {
        let result = self.fetch(id).await;
        log_outcome("find_one", result)
    }

    /// Merge `patch` over the stored post and save the result.
    ///
    /// Read-modify-write without isolation: a concurrent writer between the
    /// fetch and the save is overwritten.
    pub async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Post, DomainError> {
        let result: Result<Post, DomainError> = async {
            let current = self.fetch(id).await?;
            tracing::debug!(post = ?current, "merging patch into post");
            Ok(self.repo.save(current.merge(patch)).await?)
        }
        .await;
        log_outcome("update", result)
    }

    /// Soft-delete a post. The row stays in storage with `deleted_at` set.
    pub async fn remove(&self, id: Uuid) -> Result<SoftDeleteResult, DomainError> {
        let result: Result<SoftDeleteResult, DomainError> = async {
            let current = self.fetch(id).await?;
            tracing::debug!(post = ?current, "soft-deleting post");
            Ok(self.repo.soft_delete(id).await?)
        }
        .await;
        log_outcome("remove", result)
    }

    async fn fetch(&self, id: Uuid) -> Result<Post, DomainError> {
        self.repo
            .find_one(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: ENTITY_TYPE,
                id,
            })
    }
}

fn log_outcome<T: Debug>(
    operation: &'static str,
    result: Result<T, DomainError>,
) -> Result<T, DomainError> {
    match &result {
        Ok(value) => tracing::debug!(operation, result = ?value, "post operation succeeded"),
        Err(error) => tracing::debug!(operation, error = %error, "post operation failed"),
    }
    result
}
