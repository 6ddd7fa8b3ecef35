// src/application/commands/users.rs
use std::sync::Arc;

use crate::{
    application::{dto::UserDto, error::ApplicationResult, ports::time::Clock},
    domain::user::{NewUser, UserRepository, Username},
};

pub struct EnsureUserCommand {
    pub username: String,
    pub is_staff: bool,
}

pub struct UserCommandService {
    user_repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(user_repo: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { user_repo, clock }
    }

    /// Return the user called `username`, creating it first if needed. An
    /// existing account keeps its stored staff flag.
    pub async fn ensure_user(&self, command: EnsureUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        if let Some(existing) = self.user_repo.find_by_username(&username).await? {
            return Ok(existing.into());
        }

        let created = self
            .user_repo
            .insert(NewUser::new(username, command.is_staff, self.clock.now()))
            .await?;
        tracing::info!(
            user_id = i64::from(created.id),
            username = %created.username,
            is_staff = created.is_staff,
            "user provisioned"
        );
        Ok(created.into())
    }
}
