// src/application/queries/feeds/index.rs
use super::FeedQueryService;
use crate::{
    application::{dto::FeedPageDto, error::ApplicationResult},
    domain::feed::{FeedScope, PageRequest},
};

impl FeedQueryService {
    pub async fn index_feed(&self, page: PageRequest) -> ApplicationResult<FeedPageDto> {
        self.paginate_scope(FeedScope::All, page).await
    }
}
