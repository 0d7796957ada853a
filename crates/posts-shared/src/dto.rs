//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub contents: String,
}

impl CreatePostRequest {
    /// Field-level validation errors; empty when the request is acceptable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push("title must not be empty".to_string());
        }
        if self.contents.trim().is_empty() {
            errors.push("contents must not be empty".to_string());
        }
        errors
    }
}

/// Request to partially update a post. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
}

impl UpdatePostRequest {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.title.is_none() && self.contents.is_none() {
            errors.push("at least one of title or contents is required".to_string());
        }
        if matches!(&self.title, Some(t) if t.trim().is_empty()) {
            errors.push("title must not be empty".to_string());
        }
        if matches!(&self.contents, Some(c) if c.trim().is_empty()) {
            errors.push("contents must not be empty".to_string());
        }
        errors
    }
}

/// Response containing a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub contents: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

/// Response to a delete request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePostResponse {
    pub affected: u64,
}
