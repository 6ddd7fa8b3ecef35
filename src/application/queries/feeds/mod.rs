// src/application/queries/feeds/mod.rs
mod follow;
mod group;
mod index;
mod profile;
mod service;

pub use service::FeedQueryService;
