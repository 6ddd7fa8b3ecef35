// src/application/commands/groups/create.rs
use super::{GroupCommandService, capability::ensure_staff};
use crate::{
    application::{
        dto::{AuthenticatedUser, GroupDto},
        error::ApplicationResult,
    },
    domain::group::{GroupDescription, GroupTitle, NewGroup},
};

pub struct CreateGroupCommand {
    pub title: String,
    /// Free text; it is run through slug derivation, never stored verbatim.
    pub slug: Option<String>,
    pub description: String,
}

impl GroupCommandService {
    pub async fn create_group(
        &self,
        actor: &AuthenticatedUser,
        command: CreateGroupCommand,
    ) -> ApplicationResult<GroupDto> {
        ensure_staff(actor)?;

        let title = GroupTitle::new(command.title)?;
        let description = GroupDescription::new(command.description)?;
        let slug = self.slug_service.resolve(command.slug.as_deref(), &title)?;

        let new_group = NewGroup {
            title,
            slug: slug.clone(),
            description,
        };

        let created = self
            .repo
            .insert(new_group)
            .await
            .map_err(|err| Self::reject_duplicate(err, &slug))?;

        tracing::info!(
            group_id = i64::from(created.id),
            slug = %created.slug,
            actor = %actor.username,
            "group created"
        );
        Ok(created.into())
    }
}
