// src/application/commands/groups/service.rs
use std::sync::Arc;

use crate::{
    application::error::ApplicationError,
    domain::{
        errors::DomainError,
        group::{GroupRepository, GroupSlug, services::GroupSlugService},
    },
};

pub struct GroupCommandService {
    pub(super) repo: Arc<dyn GroupRepository>,
    pub(super) slug_service: Arc<GroupSlugService>,
}

impl GroupCommandService {
    pub fn new(repo: Arc<dyn GroupRepository>, slug_service: Arc<GroupSlugService>) -> Self {
        Self { repo, slug_service }
    }

    /// The repository owns slug uniqueness; its refusal is turned into an
    /// error the person filling in the form can act on.
    pub(super) fn reject_duplicate(err: DomainError, slug: &GroupSlug) -> ApplicationError {
        if matches!(err, DomainError::Conflict(_)) {
            tracing::warn!(slug = %slug, "group slug already taken");
        }
        ApplicationError::from(err)
            .conflict_as_validation(format!("a group with the address '{slug}' already exists"))
    }
}
