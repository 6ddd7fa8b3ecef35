// src/application/dto/posts.rs
use crate::domain::{group::Group, post::Post};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{CommentDto, GroupRefDto, serde_time};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub text: String,
    #[serde(with = "serde_time")]
    pub pub_date: DateTime<Utc>,
    pub author_id: i64,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupRefDto>,
}

impl PostDto {
    pub fn from_parts(post: Post, author: &str, group: Option<&Group>) -> Self {
        Self {
            id: post.id.into(),
            text: post.text.into_inner(),
            pub_date: post.pub_date,
            author_id: post.author_id.into(),
            author: author.to_owned(),
            group: group.map(GroupRefDto::from),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDetailDto {
    pub post: PostDto,
    /// Number of posts the author has published in total.
    pub author_post_count: u64,
    pub comments: Vec<CommentDto>,
}
