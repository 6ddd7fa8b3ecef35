// src/infrastructure/repositories/memory/store.rs
use std::{
    collections::BTreeMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use super::super::error::map_poison;
use crate::domain::{
    comment::{Comment, CommentId},
    errors::DomainResult,
    follow::Follow,
    group::{Group, GroupId},
    post::{Post, PostId},
    user::{User, UserId},
};

/// Process-local tables shared by every in-memory repository. All tables
/// live behind one lock so that cross-table reads, like the following feed,
/// see a consistent snapshot.
#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<Tables>,
}

#[derive(Default)]
pub(super) struct Tables {
    pub users: BTreeMap<UserId, User>,
    pub groups: BTreeMap<GroupId, Group>,
    pub posts: BTreeMap<PostId, Post>,
    pub comments: BTreeMap<CommentId, Comment>,
    pub follows: Vec<Follow>,
    sequences: Sequences,
}

#[derive(Default)]
struct Sequences {
    users: i64,
    groups: i64,
    posts: i64,
    comments: i64,
}

impl Tables {
    pub fn next_user_id(&mut self) -> UserId {
        self.sequences.users += 1;
        UserId(self.sequences.users)
    }

    pub fn next_group_id(&mut self) -> GroupId {
        self.sequences.groups += 1;
        GroupId(self.sequences.groups)
    }

    pub fn next_post_id(&mut self) -> PostId {
        self.sequences.posts += 1;
        PostId(self.sequences.posts)
    }

    pub fn next_comment_id(&mut self) -> CommentId {
        self.sequences.comments += 1;
        CommentId(self.sequences.comments)
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn read(&self) -> DomainResult<RwLockReadGuard<'_, Tables>> {
        self.state.read().map_err(map_poison)
    }

    pub(super) fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Tables>> {
        self.state.write().map_err(map_poison)
    }
}
