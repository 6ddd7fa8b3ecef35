// src/application/dto/feed.rs
use crate::domain::feed::FeedPage;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{GroupDto, PostDto, ProfileDto};

/// Wire form of one feed page. Every feed endpoint answers with this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FeedPageDto {
    pub items: Vec<PostDto>,
    pub total_count: usize,
    pub page_number: usize,
    pub num_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<usize>,
}

impl From<FeedPage<PostDto>> for FeedPageDto {
    fn from(page: FeedPage<PostDto>) -> Self {
        let next_page = page.next_page_number();
        let previous_page = page.previous_page_number();
        Self {
            items: page.items,
            total_count: page.total_count,
            page_number: page.page_number,
            num_pages: page.num_pages,
            has_next: page.has_next,
            has_previous: page.has_previous,
            next_page,
            previous_page,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GroupFeedDto {
    pub group: GroupDto,
    pub page: FeedPageDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileFeedDto {
    pub author: ProfileDto,
    pub page: FeedPageDto,
}
