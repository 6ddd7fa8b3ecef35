// src/application/dto/groups.rs
use crate::domain::group::Group;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GroupDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
}

impl From<Group> for GroupDto {
    fn from(group: Group) -> Self {
        Self {
            id: group.id.into(),
            title: group.title.into_inner(),
            slug: group.slug.into_inner(),
            description: group.description.into_inner(),
        }
    }
}

/// Just enough of a group to link to it from a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GroupRefDto {
    pub id: i64,
    pub slug: String,
    pub title: String,
}

impl From<&Group> for GroupRefDto {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id.into(),
            slug: group.slug.as_str().to_owned(),
            title: group.title.as_str().to_owned(),
        }
    }
}
