// src/application/queries/groups.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::GroupDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::group::{Group, GroupRepository, GroupSlug},
};

pub struct GroupQueryService {
    repo: Arc<dyn GroupRepository>,
}

impl GroupQueryService {
    pub fn new(repo: Arc<dyn GroupRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_groups(&self) -> ApplicationResult<Vec<GroupDto>> {
        let groups = self.repo.list().await?;
        Ok(groups.into_iter().map(Into::into).collect())
    }

    pub async fn get_group(&self, slug: &str) -> ApplicationResult<GroupDto> {
        self.find_group(slug).await.map(Into::into)
    }

    pub(crate) async fn find_group(&self, slug: &str) -> ApplicationResult<Group> {
        // anything that could never have been derived cannot name a group
        let slug =
            GroupSlug::new(slug).map_err(|_| ApplicationError::not_found("group not found"))?;
        self.repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("group not found"))
    }
}
