// src/domain/post/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::feed::FeedScope;
use crate::domain::post::{
    entity::{NewPost, Post, PostUpdate},
    value_objects::PostId,
};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    /// Posts in `scope`, newest `pub_date` first, ties broken by the higher id.
    async fn list(&self, scope: FeedScope) -> DomainResult<Vec<Post>>;
    async fn count_by_author(&self, author_id: UserId) -> DomainResult<u64>;
}
