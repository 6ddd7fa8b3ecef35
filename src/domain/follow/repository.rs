// src/domain/follow/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::follow::entity::{Follow, NewFollow};
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Follow relations, unique per `(user, author)` pair.
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Return the existing relation or store a new one. The flag is `true`
    /// when the relation was created by this call.
    async fn get_or_create(&self, follow: NewFollow) -> DomainResult<(Follow, bool)>;
    /// Remove the relation; `false` when there was nothing to remove.
    async fn delete(&self, user_id: UserId, author_id: UserId) -> DomainResult<bool>;
    async fn exists(&self, user_id: UserId, author_id: UserId) -> DomainResult<bool>;
    /// How many users follow `author_id`.
    async fn count_followers(&self, author_id: UserId) -> DomainResult<u64>;
}
