// src/domain/follow/entity.rs
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// `user` reads everything `author` publishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follow {
    pub user_id: UserId,
    pub author_id: UserId,
    pub created: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewFollow {
    pub user_id: UserId,
    pub author_id: UserId,
    pub created: DateTime<Utc>,
}
