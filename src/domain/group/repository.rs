// src/domain/group/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::group::{
    entity::{Group, NewGroup},
    value_objects::{GroupId, GroupSlug},
};
use async_trait::async_trait;

/// Storage for groups. Slugs are unique: both `insert` and `update` fail
/// with `Conflict` when another group already owns the slug.
#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn insert(&self, group: NewGroup) -> DomainResult<Group>;
    async fn update(&self, group: Group) -> DomainResult<Group>;
    async fn find_by_id(&self, id: GroupId) -> DomainResult<Option<Group>>;
    async fn find_by_slug(&self, slug: &GroupSlug) -> DomainResult<Option<Group>>;
    /// All groups ordered by title.
    async fn list(&self) -> DomainResult<Vec<Group>>;
}
