// src/domain/comment/repository.rs
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::errors::DomainResult;
use crate::domain::post::PostId;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    /// Comments on the post, newest first.
    async fn list_for_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>>;
}
