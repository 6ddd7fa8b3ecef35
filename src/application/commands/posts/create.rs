// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::ApplicationResult,
    },
    domain::post::{NewPost, PostText},
};

pub struct CreatePostCommand {
    pub text: String,
    pub group_id: Option<i64>,
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let text = PostText::new(command.text)?;
        let group = self.resolve_group(command.group_id).await?;

        let new_post = NewPost {
            text,
            author_id: actor.id,
            group_id: group.as_ref().map(|group| group.id),
            pub_date: self.clock.now(),
        };

        let created = self.post_repo.insert(new_post).await?;
        tracing::info!(
            post_id = i64::from(created.id),
            author = %actor.username,
            preview = created.text.preview(),
            "post published"
        );
        Ok(PostDto::from_parts(created, &actor.username, group.as_ref()))
    }
}
