// src/presentation/http/controllers/follows.rs
use crate::application::dto::FollowStatusDto;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    post,
    path = "/api/v1/profiles/{username}/follow",
    params(("username" = String, Path, description = "Author to follow")),
    responses(
        (status = 200, description = "Now following; repeating the call changes nothing.", body = FollowStatusDto),
        (status = 400, description = "Tried to follow yourself.", body = ErrorResponse),
        (status = 404, description = "No such author.", body = ErrorResponse)
    ),
    tag = "Follows"
)]
pub async fn follow(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<FollowStatusDto>> {
    state
        .services
        .follow_commands
        .follow(&user, &username)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/profiles/{username}/follow",
    params(("username" = String, Path, description = "Author to unfollow")),
    responses(
        (status = 200, description = "No longer following.", body = FollowStatusDto),
        (status = 404, description = "No such author, or not following them.", body = ErrorResponse)
    ),
    tag = "Follows"
)]
pub async fn unfollow(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<FollowStatusDto>> {
    state
        .services
        .follow_commands
        .unfollow(&user, &username)
        .await
        .into_http()
        .map(Json)
}
