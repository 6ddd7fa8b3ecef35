// src/domain/feed/mod.rs
pub mod page;
pub mod scope;

pub use page::{FeedPage, PageRequest, paginate};
pub use scope::FeedScope;
