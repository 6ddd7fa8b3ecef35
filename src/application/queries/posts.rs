// src/application/queries/posts.rs
use std::sync::Arc;

use super::assembler::PostAssembler;
use crate::{
    application::{
        dto::{CommentDto, PostDetailDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::CommentRepository,
        post::{PostId, PostRepository},
        user::UserRepository,
    },
};

pub struct PostQueryService {
    post_repo: Arc<dyn PostRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    user_repo: Arc<dyn UserRepository>,
    assembler: Arc<PostAssembler>,
}

impl PostQueryService {
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        user_repo: Arc<dyn UserRepository>,
        assembler: Arc<PostAssembler>,
    ) -> Self {
        Self {
            post_repo,
            comment_repo,
            user_repo,
            assembler,
        }
    }

    pub async fn post_detail(&self, id: i64) -> ApplicationResult<PostDetailDto> {
        let id = PostId::new(id).map_err(|_| ApplicationError::not_found("post not found"))?;
        let post = self
            .post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let author_post_count = self.post_repo.count_by_author(post.author_id).await?;
        let comments = self.comment_repo.list_for_post(id).await?;

        let mut dtos = Vec::with_capacity(comments.len());
        for comment in comments {
            let author = self
                .user_repo
                .find_by_id(comment.author_id)
                .await?
                .map(|user| String::from(user.username))
                .unwrap_or_default();
            dtos.push(CommentDto::from_parts(comment, &author));
        }

        Ok(PostDetailDto {
            post: self.assembler.assemble_one(post).await?,
            author_post_count,
            comments: dtos,
        })
    }
}
