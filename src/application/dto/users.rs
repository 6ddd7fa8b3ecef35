// src/application/dto/users.rs
use crate::domain::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub is_staff: bool,
    #[serde(with = "serde_time")]
    pub joined_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.into(),
            is_staff: user.is_staff,
            joined_at: user.joined_at,
        }
    }
}

/// Author summary shown above a profile feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub username: String,
    pub post_count: u64,
    pub followers: u64,
    /// Whether the viewer follows this author; always false for anonymous
    /// viewers.
    pub following: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FollowStatusDto {
    pub author: String,
    pub following: bool,
    pub followers: u64,
}
