// src/domain/mod.rs
pub mod comment;
pub mod errors;
pub mod feed;
pub mod follow;
pub mod group;
pub mod post;
pub mod slug;
pub mod user;
