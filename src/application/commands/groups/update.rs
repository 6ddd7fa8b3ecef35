// src/application/commands/groups/update.rs
use super::{GroupCommandService, capability::ensure_staff};
use crate::{
    application::{
        dto::{AuthenticatedUser, GroupDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::group::{GroupDescription, GroupSlug, GroupTitle},
};

pub struct UpdateGroupCommand {
    /// Slug the group is currently stored under.
    pub slug: String,
    pub title: Option<String>,
    /// When present the group's slug is derived again from this text. A
    /// title change alone keeps the existing address.
    pub new_slug: Option<String>,
    pub description: Option<String>,
}

impl GroupCommandService {
    pub async fn update_group(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateGroupCommand,
    ) -> ApplicationResult<GroupDto> {
        ensure_staff(actor)?;

        let current = GroupSlug::new(command.slug)
            .map_err(|_| ApplicationError::not_found("group not found"))?;
        let mut group = self
            .repo
            .find_by_slug(&current)
            .await?
            .ok_or_else(|| ApplicationError::not_found("group not found"))?;

        if let Some(title) = command.title {
            group.rename(GroupTitle::new(title)?);
        }
        if let Some(description) = command.description {
            group.set_description(GroupDescription::new(description)?);
        }
        if let Some(requested) = command.new_slug {
            let slug = self.slug_service.resolve(Some(&requested), &group.title)?;
            group.set_slug(slug);
        }

        let slug = group.slug.clone();
        let updated = self
            .repo
            .update(group)
            .await
            .map_err(|err| Self::reject_duplicate(err, &slug))?;

        tracing::info!(
            group_id = i64::from(updated.id),
            slug = %updated.slug,
            previous_slug = %current,
            "group updated"
        );
        Ok(updated.into())
    }
}
