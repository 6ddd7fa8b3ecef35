// src/application/dto/auth.rs
use crate::domain::user::{User, UserId};

/// The user a request acts on behalf of, as resolved by the authenticator.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub is_staff: bool,
}

impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username.into(),
            is_staff: user.is_staff,
        }
    }
}
