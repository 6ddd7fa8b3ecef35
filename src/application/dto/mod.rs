// src/application/dto/mod.rs
pub mod auth;
pub mod comments;
pub mod feed;
pub mod groups;
pub mod posts;
pub mod serde_time;
pub mod users;

pub use auth::AuthenticatedUser;
pub use comments::CommentDto;
pub use feed::{FeedPageDto, GroupFeedDto, ProfileFeedDto};
pub use groups::{GroupDto, GroupRefDto};
pub use posts::{PostDetailDto, PostDto};
pub use users::{FollowStatusDto, ProfileDto, UserDto};
