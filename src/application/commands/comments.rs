// src/application/commands/comments.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        comment::{CommentRepository, CommentText, NewComment},
        post::{PostId, PostRepository},
    },
};

pub struct AddCommentCommand {
    pub post_id: i64,
    pub text: String,
}

pub struct CommentCommandService {
    post_repo: Arc<dyn PostRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            post_repo,
            comment_repo,
            clock,
        }
    }

    pub async fn add_comment(
        &self,
        actor: &AuthenticatedUser,
        command: AddCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let post_id = PostId::new(command.post_id)
            .map_err(|_| ApplicationError::not_found("post not found"))?;
        if self.post_repo.find_by_id(post_id).await?.is_none() {
            return Err(ApplicationError::not_found("post not found"));
        }

        let text = CommentText::new(command.text)?;
        let comment = self
            .comment_repo
            .insert(NewComment {
                post_id,
                author_id: actor.id,
                text,
                created: self.clock.now(),
            })
            .await?;

        tracing::info!(
            comment_id = i64::from(comment.id),
            post_id = command.post_id,
            author = %actor.username,
            "comment added"
        );
        Ok(CommentDto::from_parts(comment, &actor.username))
    }
}
