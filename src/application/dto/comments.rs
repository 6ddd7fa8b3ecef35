// src/application/dto/comments.rs
use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub author: String,
    pub text: String,
    #[serde(with = "serde_time")]
    pub created: DateTime<Utc>,
}

impl CommentDto {
    pub fn from_parts(comment: Comment, author: &str) -> Self {
        Self {
            id: comment.id.into(),
            post_id: comment.post_id.into(),
            author_id: comment.author_id.into(),
            author: author.to_owned(),
            text: comment.text.into_inner(),
            created: comment.created,
        }
    }
}
