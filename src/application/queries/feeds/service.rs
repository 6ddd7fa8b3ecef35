// src/application/queries/feeds/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::FeedPageDto,
        error::ApplicationResult,
        queries::{assembler::PostAssembler, groups::GroupQueryService, users::UserQueryService},
    },
    domain::{
        feed::{FeedScope, PageRequest, paginate},
        post::PostRepository,
    },
};

/// Every list of posts on the site goes through this service, so all feeds
/// share ordering, page size and page geometry.
pub struct FeedQueryService {
    pub(super) post_repo: Arc<dyn PostRepository>,
    pub(super) assembler: Arc<PostAssembler>,
    pub(super) groups: Arc<GroupQueryService>,
    pub(super) users: Arc<UserQueryService>,
    page_size: usize,
}

impl FeedQueryService {
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        assembler: Arc<PostAssembler>,
        groups: Arc<GroupQueryService>,
        users: Arc<UserQueryService>,
        page_size: usize,
    ) -> Self {
        Self {
            post_repo,
            assembler,
            groups,
            users,
            page_size,
        }
    }

    /// Select the posts in `scope`, cut out the requested page and only then
    /// resolve authors and groups for the posts actually shown.
    pub(super) async fn paginate_scope(
        &self,
        scope: FeedScope,
        page: PageRequest,
    ) -> ApplicationResult<FeedPageDto> {
        let candidates = self.post_repo.list(scope).await?;
        let window = paginate(candidates, self.page_size, page)?;
        let lookups = self.assembler.load(&window.items).await?;
        Ok(window.map(|post| lookups.to_dto(post)).into())
    }
}
