// src/application/queries/mod.rs
pub mod assembler;
pub mod feeds;
pub mod groups;
pub mod posts;
pub mod users;
