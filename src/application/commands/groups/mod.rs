// src/application/commands/groups/mod.rs
mod capability;
mod create;
mod service;
mod update;

pub use create::CreateGroupCommand;
pub use service::GroupCommandService;
pub use update::UpdateGroupCommand;
