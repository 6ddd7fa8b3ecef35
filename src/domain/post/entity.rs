// src/domain/post/entity.rs
use crate::domain::group::GroupId;
use crate::domain::post::value_objects::{PostId, PostText};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub text: PostText,
    pub author_id: UserId,
    pub group_id: Option<GroupId>,
    pub pub_date: DateTime<Utc>,
}

impl Post {
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub text: PostText,
    pub author_id: UserId,
    pub group_id: Option<GroupId>,
    pub pub_date: DateTime<Utc>,
}

/// Replacement content for an existing post. The publication date and the
/// author never change.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub text: PostText,
    pub group_id: Option<GroupId>,
}

impl PostUpdate {
    pub fn new(id: PostId, text: PostText) -> Self {
        Self {
            id,
            text,
            group_id: None,
        }
    }

    pub fn with_group(mut self, group_id: Option<GroupId>) -> Self {
        self.group_id = group_id;
        self
    }
}
