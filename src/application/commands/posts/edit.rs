// src/application/commands/posts/edit.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostId, PostText, PostUpdate, specifications::CanEditPostSpec},
};

/// Full replacement of a post's content; leaving `group_id` empty takes the
/// post out of its group.
pub struct EditPostCommand {
    pub id: i64,
    pub text: String,
    pub group_id: Option<i64>,
}

impl PostCommandService {
    pub async fn edit_post(
        &self,
        actor: &AuthenticatedUser,
        command: EditPostCommand,
    ) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id)
            .map_err(|_| ApplicationError::not_found("post not found"))?;
        let post = self
            .post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if !CanEditPostSpec::new(&post, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author may edit this post",
            ));
        }

        let text = PostText::new(command.text)?;
        let group = self.resolve_group(command.group_id).await?;
        let update = PostUpdate::new(id, text).with_group(group.as_ref().map(|group| group.id));

        let updated = self.post_repo.update(update).await?;
        tracing::info!(post_id = i64::from(updated.id), "post edited");
        Ok(PostDto::from_parts(updated, &actor.username, group.as_ref()))
    }
}
