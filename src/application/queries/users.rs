// src/application/queries/users.rs
use std::sync::Arc;

use super::assembler::ProfileSummarizer;
use crate::{
    application::{
        dto::{AuthenticatedUser, ProfileDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{User, UserRepository, Username},
};

pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
    summarizer: Arc<ProfileSummarizer>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>, summarizer: Arc<ProfileSummarizer>) -> Self {
        Self {
            user_repo,
            summarizer,
        }
    }

    pub async fn profile(
        &self,
        username: &str,
        viewer: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<ProfileDto> {
        let author = self.find_author(username).await?;
        self.summarize(&author, viewer).await
    }

    pub async fn summarize(
        &self,
        author: &User,
        viewer: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<ProfileDto> {
        self.summarizer.summarize(author, viewer).await
    }

    /// Look up a user by the name used in profile URLs.
    pub async fn find_author(&self, username: &str) -> ApplicationResult<User> {
        let username =
            Username::new(username).map_err(|_| ApplicationError::not_found("author not found"))?;
        self.user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))
    }
}
