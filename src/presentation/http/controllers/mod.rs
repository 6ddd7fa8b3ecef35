// src/presentation/http/controllers/mod.rs
pub mod feeds;
pub mod follows;
pub mod groups;
pub mod posts;
