// src/application/queries/assembler.rs
//! Turns stored rows into the DTOs queries hand out, resolving the author
//! and group each row points at.
use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto, ProfileDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        follow::FollowRepository,
        group::{Group, GroupId, GroupRepository},
        post::{Post, PostRepository},
        user::{User, UserId, UserRepository},
    },
};

pub struct PostAssembler {
    user_repo: Arc<dyn UserRepository>,
    group_repo: Arc<dyn GroupRepository>,
}

/// Authors and groups referenced by a batch of posts, fetched once each.
pub struct PostLookups {
    authors: HashMap<UserId, String>,
    groups: HashMap<GroupId, Group>,
}

impl PostAssembler {
    pub fn new(user_repo: Arc<dyn UserRepository>, group_repo: Arc<dyn GroupRepository>) -> Self {
        Self {
            user_repo,
            group_repo,
        }
    }

    pub async fn load(&self, posts: &[Post]) -> ApplicationResult<PostLookups> {
        let author_ids: HashSet<UserId> = posts.iter().map(|post| post.author_id).collect();
        let group_ids: HashSet<GroupId> = posts.iter().filter_map(|post| post.group_id).collect();

        let mut authors = HashMap::with_capacity(author_ids.len());
        for id in author_ids {
            let user = self.user_repo.find_by_id(id).await?.ok_or_else(|| {
                ApplicationError::infrastructure(format!("author {} of a post is missing", id.0))
            })?;
            authors.insert(id, user.username.into());
        }

        let mut groups = HashMap::with_capacity(group_ids.len());
        for id in group_ids {
            // a dangling group reference renders as a post without a group
            if let Some(group) = self.group_repo.find_by_id(id).await? {
                groups.insert(id, group);
            }
        }

        Ok(PostLookups { authors, groups })
    }

    pub async fn assemble_one(&self, post: Post) -> ApplicationResult<PostDto> {
        let lookups = self.load(std::slice::from_ref(&post)).await?;
        Ok(lookups.to_dto(post))
    }
}

impl PostLookups {
    pub fn to_dto(&self, post: Post) -> PostDto {
        let author = self
            .authors
            .get(&post.author_id)
            .map_or("", String::as_str)
            .to_owned();
        let group = post.group_id.and_then(|id| self.groups.get(&id));
        PostDto::from_parts(post, &author, group)
    }
}

/// Counts shown next to an author's name.
pub struct ProfileSummarizer {
    post_repo: Arc<dyn PostRepository>,
    follow_repo: Arc<dyn FollowRepository>,
}

impl ProfileSummarizer {
    pub fn new(post_repo: Arc<dyn PostRepository>, follow_repo: Arc<dyn FollowRepository>) -> Self {
        Self {
            post_repo,
            follow_repo,
        }
    }

    pub async fn summarize(
        &self,
        author: &User,
        viewer: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<ProfileDto> {
        let post_count = self.post_repo.count_by_author(author.id).await?;
        let followers = self.follow_repo.count_followers(author.id).await?;
        let following = match viewer {
            Some(viewer) => self.follow_repo.exists(viewer.id, author.id).await?,
            None => false,
        };

        Ok(ProfileDto {
            username: author.username.to_string(),
            post_count,
            followers,
            following,
        })
    }
}
