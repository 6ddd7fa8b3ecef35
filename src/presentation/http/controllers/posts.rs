// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::{
        comments::AddCommentCommand,
        posts::{CreatePostCommand, EditPostCommand},
    },
    dto::{CommentDto, PostDetailDto, PostDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PostRequest {
    pub text: String,
    #[serde(default)]
    pub group_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentRequest {
    pub text: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = PostRequest,
    responses(
        (status = 201, description = "Post published.", body = PostDto),
        (status = 400, description = "Empty text or unknown group.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<PostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        text: payload.text,
        group_id: payload.group_id,
    };

    state
        .services
        .post_commands
        .create_post(&user, command)
        .await
        .into_http()
        .map(|post| (StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post with its comments.", body = PostDetailDto),
        (status = 404, description = "No such post.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn post_detail(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<PostDetailDto>> {
    state
        .services
        .post_queries
        .post_detail(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    request_body = PostRequest,
    responses(
        (status = 200, description = "Post updated.", body = PostDto),
        (status = 403, description = "Caller is not the author.", body = ErrorResponse),
        (status = 404, description = "No such post.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn edit_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<PostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = EditPostCommand {
        id,
        text: payload.text,
        group_id: payload.group_id,
    };

    state
        .services
        .post_commands
        .edit_post(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/posts/{id}/comments",
    params(("id" = i64, Path, description = "Post id")),
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment added.", body = CommentDto),
        (status = 404, description = "No such post.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<CommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let command = AddCommentCommand {
        post_id: id,
        text: payload.text,
    };

    state
        .services
        .comment_commands
        .add_comment(&user, command)
        .await
        .into_http()
        .map(|comment| (StatusCode::CREATED, Json(comment)))
}
