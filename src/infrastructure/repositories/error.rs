// src/infrastructure/repositories/error.rs
use std::sync::PoisonError;

use crate::domain::errors::DomainError;

pub const CNT_USER_USERNAME: &str = "users_username_key";
pub const CNT_GROUP_SLUG: &str = "groups_slug_key";

/// A writer panicked while holding the store lock.
pub fn map_poison<T>(_: PoisonError<T>) -> DomainError {
    DomainError::Persistence("in-memory store lock poisoned".into())
}

/// Unique constraint violation, reported the way the relational schema would
/// name it.
pub fn unique_violation(constraint: &str) -> DomainError {
    match constraint {
        CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
        CNT_GROUP_SLUG => DomainError::Conflict("slug already exists".into()),
        other => DomainError::Conflict(format!("unique constraint violated: {other}")),
    }
}
