// src/infrastructure/repositories/memory/comments.rs
use std::sync::Arc;

use super::InMemoryStore;
use crate::domain::comment::{Comment, CommentRepository, NewComment};
use crate::domain::errors::DomainResult;
use crate::domain::post::PostId;
use async_trait::async_trait;

#[derive(Clone)]
pub struct InMemoryCommentRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryCommentRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut tables = self.store.write()?;
        let NewComment {
            post_id,
            author_id,
            text,
            created,
        } = comment;
        let comment = Comment {
            id: tables.next_comment_id(),
            post_id,
            author_id,
            text,
            created,
        };
        tables.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn list_for_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>> {
        let tables = self.store.read()?;
        let mut comments: Vec<Comment> = tables
            .comments
            .values()
            .filter(|comment| comment.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created.cmp(&a.created).then(b.id.cmp(&a.id)));
        Ok(comments)
    }
}
