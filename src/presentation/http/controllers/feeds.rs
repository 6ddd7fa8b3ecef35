// src/presentation/http/controllers/feeds.rs
use crate::application::dto::{FeedPageDto, GroupFeedDto, ProfileFeedDto};
use crate::domain::feed::PageRequest;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

/// `page` is taken as raw text: anything that is not a number means the
/// first page, and numbers past either end are clamped.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<String>,
}

impl PageParams {
    fn request(&self) -> PageRequest {
        PageRequest::parse(self.page.as_deref())
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/posts",
    params(PageParams),
    responses(
        (status = 200, description = "Newest posts across the site.", body = FeedPageDto)
    ),
    tag = "Feeds"
)]
pub async fn index_feed(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<FeedPageDto>> {
    state
        .services
        .feed_queries
        .index_feed(params.request())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/groups/{slug}/posts",
    params(("slug" = String, Path, description = "Group address"), PageParams),
    responses(
        (status = 200, description = "The group and a page of its posts.", body = GroupFeedDto),
        (status = 404, description = "No such group.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Feeds"
)]
pub async fn group_feed(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<GroupFeedDto>> {
    state
        .services
        .feed_queries
        .group_feed(&slug, params.request())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/profiles/{username}",
    params(("username" = String, Path, description = "Author username"), PageParams),
    responses(
        (status = 200, description = "Author summary and a page of their posts.", body = ProfileFeedDto),
        (status = 404, description = "No such author.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Feeds"
)]
pub async fn profile_feed(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Path(username): Path<String>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<ProfileFeedDto>> {
    state
        .services
        .feed_queries
        .profile_feed(&username, params.request(), viewer.0.as_ref())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/follow",
    params(PageParams),
    responses(
        (status = 200, description = "Posts by followed authors.", body = FeedPageDto),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Feeds"
)]
pub async fn follow_feed(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<FeedPageDto>> {
    state
        .services
        .feed_queries
        .follow_feed(&user, params.request())
        .await
        .into_http()
        .map(Json)
}
