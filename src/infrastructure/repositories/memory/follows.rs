// src/infrastructure/repositories/memory/follows.rs
use std::sync::Arc;

use super::InMemoryStore;
use crate::domain::errors::DomainResult;
use crate::domain::follow::{Follow, FollowRepository, NewFollow};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[derive(Clone)]
pub struct InMemoryFollowRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryFollowRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FollowRepository for InMemoryFollowRepository {
    async fn get_or_create(&self, follow: NewFollow) -> DomainResult<(Follow, bool)> {
        let mut tables = self.store.write()?;
        if let Some(existing) = tables
            .follows
            .iter()
            .find(|stored| stored.user_id == follow.user_id && stored.author_id == follow.author_id)
        {
            return Ok((existing.clone(), false));
        }

        let created = Follow {
            user_id: follow.user_id,
            author_id: follow.author_id,
            created: follow.created,
        };
        tables.follows.push(created.clone());
        Ok((created, true))
    }

    async fn delete(&self, user_id: UserId, author_id: UserId) -> DomainResult<bool> {
        let mut tables = self.store.write()?;
        let before = tables.follows.len();
        tables
            .follows
            .retain(|follow| !(follow.user_id == user_id && follow.author_id == author_id));
        Ok(tables.follows.len() != before)
    }

    async fn exists(&self, user_id: UserId, author_id: UserId) -> DomainResult<bool> {
        let tables = self.store.read()?;
        Ok(tables
            .follows
            .iter()
            .any(|follow| follow.user_id == user_id && follow.author_id == author_id))
    }

    async fn count_followers(&self, author_id: UserId) -> DomainResult<u64> {
        let tables = self.store.read()?;
        let count = tables
            .follows
            .iter()
            .filter(|follow| follow.author_id == author_id)
            .count();
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn pair(user: i64, author: i64) -> NewFollow {
        NewFollow {
            user_id: UserId(user),
            author_id: UserId(author),
            created: Utc::now(),
        }
    }

    #[tokio::test]
    async fn get_or_create_is_idempotent() {
        let repo = InMemoryFollowRepository::new(Arc::new(InMemoryStore::new()));
        let (_, created) = repo.get_or_create(pair(1, 2)).await.unwrap();
        assert!(created);
        let (_, created) = repo.get_or_create(pair(1, 2)).await.unwrap();
        assert!(!created);
        repo.get_or_create(pair(3, 2)).await.unwrap();

        assert_eq!(repo.count_followers(UserId(2)).await.unwrap(), 2);
        assert!(repo.exists(UserId(1), UserId(2)).await.unwrap());
        assert!(!repo.exists(UserId(2), UserId(1)).await.unwrap());
    }

    #[tokio::test]
    async fn delete_reports_whether_anything_was_removed() {
        let repo = InMemoryFollowRepository::new(Arc::new(InMemoryStore::new()));
        repo.get_or_create(pair(1, 2)).await.unwrap();
        assert!(repo.delete(UserId(1), UserId(2)).await.unwrap());
        assert!(!repo.delete(UserId(1), UserId(2)).await.unwrap());
        assert_eq!(repo.count_followers(UserId(2)).await.unwrap(), 0);
    }
}
