// src/presentation/http/controllers/groups.rs
use crate::application::{
    commands::groups::{CreateGroupCommand, UpdateGroupCommand},
    dto::GroupDto,
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
pub struct CreateGroupRequest {
    pub title: String,
    /// Optional free text for the address; the title is used when it is
    /// missing or yields nothing.
    #[serde(default)]
    pub slug: Option<String>,
    pub description: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateGroupRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/groups",
    responses(
        (status = 200, description = "All groups ordered by title.", body = [GroupDto])
    ),
    tag = "Groups"
)]
pub async fn list_groups(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<GroupDto>>> {
    state
        .services
        .group_queries
        .list_groups()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/groups",
    request_body = CreateGroupRequest,
    responses(
        (status = 201, description = "Group created.", body = GroupDto),
        (status = 400, description = "Invalid fields or address already taken.", body = ErrorResponse),
        (status = 403, description = "Caller is not staff.", body = ErrorResponse)
    ),
    tag = "Groups"
)]
pub async fn create_group(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateGroupRequest>,
) -> HttpResult<(StatusCode, Json<GroupDto>)> {
    let command = CreateGroupCommand {
        title: payload.title,
        slug: payload.slug,
        description: payload.description,
    };

    state
        .services
        .group_commands
        .create_group(&user, command)
        .await
        .into_http()
        .map(|group| (StatusCode::CREATED, Json(group)))
}

#[utoipa::path(
    put,
    path = "/api/v1/groups/{slug}",
    params(("slug" = String, Path, description = "Current group address")),
    request_body = UpdateGroupRequest,
    responses(
        (status = 200, description = "Group updated.", body = GroupDto),
        (status = 400, description = "Invalid fields or address already taken.", body = ErrorResponse),
        (status = 403, description = "Caller is not staff.", body = ErrorResponse),
        (status = 404, description = "No such group.", body = ErrorResponse)
    ),
    tag = "Groups"
)]
pub async fn update_group(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateGroupRequest>,
) -> HttpResult<Json<GroupDto>> {
    let command = UpdateGroupCommand {
        slug,
        title: payload.title,
        new_slug: payload.slug,
        description: payload.description,
    };

    state
        .services
        .group_commands
        .update_group(&user, command)
        .await
        .into_http()
        .map(Json)
}
