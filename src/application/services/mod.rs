// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            comments::CommentCommandService, follows::FollowCommandService,
            groups::GroupCommandService, posts::PostCommandService, users::UserCommandService,
        },
        dto::AuthenticatedUser,
        ports::{AuthenticatorPort, ClockPort, SlugGeneratorPort},
        queries::{
            assembler::{PostAssembler, ProfileSummarizer},
            feeds::FeedQueryService,
            groups::GroupQueryService,
            posts::PostQueryService,
            users::UserQueryService,
        },
    },
    domain::{
        comment::CommentRepository, follow::FollowRepository,
        group::{GroupRepository, services::GroupSlugService},
        post::PostRepository, user::UserRepository,
    },
};

/// Storage collaborators the services are built on.
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub groups: Arc<dyn GroupRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub follows: Arc<dyn FollowRepository>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub group_commands: Arc<GroupCommandService>,
    pub post_commands: Arc<PostCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub follow_commands: Arc<FollowCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub group_queries: Arc<GroupQueryService>,
    pub post_queries: Arc<PostQueryService>,
    pub feed_queries: Arc<FeedQueryService>,
    authenticator: Arc<AuthenticatorPort>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        authenticator: Arc<AuthenticatorPort>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        posts_per_page: usize,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&clock),
        ));

        let slug_service = Arc::new(GroupSlugService::new(slugger));
        let group_commands = Arc::new(GroupCommandService::new(
            Arc::clone(&repos.groups),
            slug_service,
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&repos.posts),
            Arc::clone(&repos.groups),
            Arc::clone(&clock),
        ));
        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.posts),
            Arc::clone(&repos.comments),
            Arc::clone(&clock),
        ));
        let follow_commands = Arc::new(FollowCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.follows),
            clock,
        ));

        let assembler = Arc::new(PostAssembler::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.groups),
        ));
        let summarizer = Arc::new(ProfileSummarizer::new(
            Arc::clone(&repos.posts),
            Arc::clone(&repos.follows),
        ));

        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&repos.users), summarizer));
        let group_queries = Arc::new(GroupQueryService::new(Arc::clone(&repos.groups)));
        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&repos.posts),
            Arc::clone(&repos.comments),
            Arc::clone(&repos.users),
            Arc::clone(&assembler),
        ));
        let feed_queries = Arc::new(FeedQueryService::new(
            Arc::clone(&repos.posts),
            assembler,
            Arc::clone(&group_queries),
            Arc::clone(&user_queries),
            posts_per_page,
        ));

        Self {
            user_commands,
            group_commands,
            post_commands,
            comment_commands,
            follow_commands,
            user_queries,
            group_queries,
            post_queries,
            feed_queries,
            authenticator,
        }
    }

    /// Resolve a raw bearer token to the user it was issued to.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.authenticator.authenticate(token).await
    }
}
