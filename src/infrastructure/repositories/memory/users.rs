// src/infrastructure/repositories/memory/users.rs
use std::sync::Arc;

use super::InMemoryStore;
use crate::infrastructure::repositories::error::{CNT_USER_USERNAME, unique_violation};
use crate::domain::errors::DomainResult;
use crate::domain::user::{NewUser, User, UserId, UserRepository, Username};
use async_trait::async_trait;

#[derive(Clone)]
pub struct InMemoryUserRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryUserRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut tables = self.store.write()?;
        if tables
            .users
            .values()
            .any(|user| user.username == new_user.username)
        {
            return Err(unique_violation(CNT_USER_USERNAME));
        }

        let NewUser {
            username,
            is_staff,
            joined_at,
        } = new_user;
        let user = User {
            id: tables.next_user_id(),
            username,
            is_staff,
            joined_at,
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let tables = self.store.read()?;
        Ok(tables
            .users
            .values()
            .find(|user| &user.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.store.read()?.users.get(&id).cloned())
    }
}
