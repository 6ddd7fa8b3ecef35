// src/application/queries/feeds/group.rs
use super::FeedQueryService;
use crate::{
    application::{dto::GroupFeedDto, error::ApplicationResult},
    domain::feed::{FeedScope, PageRequest},
};

impl FeedQueryService {
    pub async fn group_feed(&self, slug: &str, page: PageRequest) -> ApplicationResult<GroupFeedDto> {
        let group = self.groups.find_group(slug).await?;
        let page = self.paginate_scope(FeedScope::Group(group.id), page).await?;
        Ok(GroupFeedDto {
            group: group.into(),
            page,
        })
    }
}
