// src/application/commands/follows.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, FollowStatusDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        follow::{FollowRepository, NewFollow, specifications::CanFollowSpec},
        user::{User, UserRepository, Username},
    },
};

pub struct FollowCommandService {
    user_repo: Arc<dyn UserRepository>,
    follow_repo: Arc<dyn FollowRepository>,
    clock: Arc<dyn Clock>,
}

impl FollowCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            follow_repo,
            clock,
        }
    }

    /// Subscribe `actor` to `username`. Following someone twice is a no-op.
    pub async fn follow(
        &self,
        actor: &AuthenticatedUser,
        username: &str,
    ) -> ApplicationResult<FollowStatusDto> {
        let author = self.find_author(username).await?;
        if !CanFollowSpec::new(actor.id, author.id).is_satisfied() {
            return Err(ApplicationError::validation("you cannot follow yourself"));
        }

        let (_, created) = self
            .follow_repo
            .get_or_create(NewFollow {
                user_id: actor.id,
                author_id: author.id,
                created: self.clock.now(),
            })
            .await?;
        if created {
            tracing::info!(follower = %actor.username, author = %author.username, "follow created");
        }

        self.status(author, true).await
    }

    pub async fn unfollow(
        &self,
        actor: &AuthenticatedUser,
        username: &str,
    ) -> ApplicationResult<FollowStatusDto> {
        let author = self.find_author(username).await?;
        if !self.follow_repo.delete(actor.id, author.id).await? {
            return Err(ApplicationError::not_found(format!(
                "you are not following {}",
                author.username
            )));
        }
        tracing::info!(follower = %actor.username, author = %author.username, "follow removed");

        self.status(author, false).await
    }

    async fn find_author(&self, username: &str) -> ApplicationResult<User> {
        let username =
            Username::new(username).map_err(|_| ApplicationError::not_found("author not found"))?;
        self.user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))
    }

    async fn status(&self, author: User, following: bool) -> ApplicationResult<FollowStatusDto> {
        let followers = self.follow_repo.count_followers(author.id).await?;
        Ok(FollowStatusDto {
            author: author.username.into(),
            following,
            followers,
        })
    }
}
