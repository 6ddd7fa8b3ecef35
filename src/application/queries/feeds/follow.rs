// src/application/queries/feeds/follow.rs
use super::FeedQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, FeedPageDto},
        error::ApplicationResult,
    },
    domain::feed::{FeedScope, PageRequest},
};

impl FeedQueryService {
    /// Posts by everyone `actor` follows, newest first.
    pub async fn follow_feed(
        &self,
        actor: &AuthenticatedUser,
        page: PageRequest,
    ) -> ApplicationResult<FeedPageDto> {
        self.paginate_scope(FeedScope::FollowedBy(actor.id), page)
            .await
    }
}
