// src/infrastructure/repositories/mod.rs
mod error;
mod memory;

pub use memory::{
    InMemoryCommentRepository, InMemoryFollowRepository, InMemoryGroupRepository,
    InMemoryPostRepository, InMemoryStore, InMemoryUserRepository,
};
