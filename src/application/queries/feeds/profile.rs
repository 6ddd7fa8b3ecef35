// src/application/queries/feeds/profile.rs
use super::FeedQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ProfileFeedDto},
        error::ApplicationResult,
    },
    domain::feed::{FeedScope, PageRequest},
};

impl FeedQueryService {
    pub async fn profile_feed(
        &self,
        username: &str,
        page: PageRequest,
        viewer: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<ProfileFeedDto> {
        let author = self.users.find_author(username).await?;
        let page = self.paginate_scope(FeedScope::Author(author.id), page).await?;
        let author = self.users.summarize(&author, viewer).await?;
        Ok(ProfileFeedDto { author, page })
    }
}
