// src/domain/feed/scope.rs
use crate::domain::{group::GroupId, user::UserId};

/// Which posts make up a feed. Every variant is ordered the same way by the
/// repository: newest publication first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedScope {
    /// Every post on the site.
    All,
    Group(GroupId),
    Author(UserId),
    /// Posts by the authors this user follows.
    FollowedBy(UserId),
}
