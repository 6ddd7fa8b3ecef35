// src/application/commands/groups/capability.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

pub(super) fn ensure_staff(actor: &AuthenticatedUser) -> ApplicationResult<()> {
    if actor.is_staff {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "only staff members may manage groups",
        ))
    }
}
