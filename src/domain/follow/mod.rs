// src/domain/follow/mod.rs
pub mod entity;
pub mod repository;
pub mod specifications;

pub use entity::{Follow, NewFollow};
pub use repository::FollowRepository;
