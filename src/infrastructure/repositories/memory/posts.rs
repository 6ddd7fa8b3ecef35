// src/infrastructure/repositories/memory/posts.rs
use std::sync::Arc;

use super::InMemoryStore;
use super::store::Tables;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::feed::FeedScope;
use crate::domain::post::{NewPost, Post, PostId, PostRepository, PostUpdate};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[derive(Clone)]
pub struct InMemoryPostRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryPostRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

fn in_scope(tables: &Tables, post: &Post, scope: FeedScope) -> bool {
    match scope {
        FeedScope::All => true,
        FeedScope::Group(group_id) => post.group_id == Some(group_id),
        FeedScope::Author(author_id) => post.author_id == author_id,
        FeedScope::FollowedBy(user_id) => tables
            .follows
            .iter()
            .any(|follow| follow.user_id == user_id && follow.author_id == post.author_id),
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut tables = self.store.write()?;
        let NewPost {
            text,
            author_id,
            group_id,
            pub_date,
        } = post;
        let post = Post {
            id: tables.next_post_id(),
            text,
            author_id,
            group_id,
            pub_date,
        };
        tables.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut tables = self.store.write()?;
        let post = tables
            .posts
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        post.text = update.text;
        post.group_id = update.group_id;
        Ok(post.clone())
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.store.read()?.posts.get(&id).cloned())
    }

    async fn list(&self, scope: FeedScope) -> DomainResult<Vec<Post>> {
        let tables = self.store.read()?;
        let mut posts: Vec<Post> = tables
            .posts
            .values()
            .filter(|post| in_scope(&tables, post, scope))
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.pub_date.cmp(&a.pub_date).then(b.id.cmp(&a.id)));
        Ok(posts)
    }

    async fn count_by_author(&self, author_id: UserId) -> DomainResult<u64> {
        let tables = self.store.read()?;
        let count = tables
            .posts
            .values()
            .filter(|post| post.author_id == author_id)
            .count();
        Ok(count as u64)
    }
}
