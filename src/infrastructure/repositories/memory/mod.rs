// src/infrastructure/repositories/memory/mod.rs
//! Repositories backed by process memory. Unique constraints are checked
//! under the store's write lock, so two concurrent writers can never both
//! claim the same username, group slug or follow pair.
mod comments;
mod follows;
mod groups;
mod posts;
mod store;
mod users;

pub use comments::InMemoryCommentRepository;
pub use follows::InMemoryFollowRepository;
pub use groups::InMemoryGroupRepository;
pub use posts::InMemoryPostRepository;
pub use store::InMemoryStore;
pub use users::InMemoryUserRepository;
