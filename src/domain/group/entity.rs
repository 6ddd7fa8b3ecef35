// src/domain/group/entity.rs
use crate::domain::group::value_objects::{GroupDescription, GroupId, GroupSlug, GroupTitle};

#[derive(Debug, Clone)]
pub struct Group {
    pub id: GroupId,
    pub title: GroupTitle,
    pub slug: GroupSlug,
    pub description: GroupDescription,
}

impl Group {
    pub fn rename(&mut self, title: GroupTitle) {
        self.title = title;
    }

    pub fn set_slug(&mut self, slug: GroupSlug) {
        self.slug = slug;
    }

    pub fn set_description(&mut self, description: GroupDescription) {
        self.description = description;
    }
}

#[derive(Debug, Clone)]
pub struct NewGroup {
    pub title: GroupTitle,
    pub slug: GroupSlug,
    pub description: GroupDescription,
}
