// src/application/commands/posts/mod.rs
mod create;
mod edit;
mod service;

pub use create::CreatePostCommand;
pub use edit::EditPostCommand;
pub use service::PostCommandService;
