// src/domain/group/mod.rs
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Group, NewGroup};
pub use repository::GroupRepository;
pub use value_objects::{GroupDescription, GroupId, GroupSlug, GroupTitle};
