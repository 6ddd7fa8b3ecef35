// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        group::{Group, GroupId, GroupRepository},
        post::PostRepository,
    },
};

pub struct PostCommandService {
    pub(super) post_repo: Arc<dyn PostRepository>,
    pub(super) group_repo: Arc<dyn GroupRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        group_repo: Arc<dyn GroupRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            post_repo,
            group_repo,
            clock,
        }
    }

    /// A post may only be filed under a group that exists.
    pub(super) async fn resolve_group(
        &self,
        group_id: Option<i64>,
    ) -> ApplicationResult<Option<Group>> {
        let Some(raw) = group_id else {
            return Ok(None);
        };
        let id = GroupId::new(raw)?;
        self.group_repo
            .find_by_id(id)
            .await?
            .map(Some)
            .ok_or_else(|| ApplicationError::validation("selected group does not exist"))
    }
}
