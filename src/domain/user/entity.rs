// src/domain/user/entity.rs
use crate::domain::user::value_objects::{UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub is_staff: bool,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub is_staff: bool,
    pub joined_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(username: Username, is_staff: bool, joined_at: DateTime<Utc>) -> Self {
        Self {
            username,
            is_staff,
            joined_at,
        }
    }
}
