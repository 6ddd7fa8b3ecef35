// src/presentation/http/openapi.rs
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::feeds::index_feed,
        crate::presentation::http::controllers::feeds::group_feed,
        crate::presentation::http::controllers::feeds::profile_feed,
        crate::presentation::http::controllers::feeds::follow_feed,
        crate::presentation::http::controllers::posts::create_post,
        crate::presentation::http::controllers::posts::post_detail,
        crate::presentation::http::controllers::posts::edit_post,
        crate::presentation::http::controllers::posts::add_comment,
        crate::presentation::http::controllers::groups::list_groups,
        crate::presentation::http::controllers::groups::create_group,
        crate::presentation::http::controllers::groups::update_group,
        crate::presentation::http::controllers::follows::follow,
        crate::presentation::http::controllers::follows::unfollow,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::posts::PostRequest,
            crate::presentation::http::controllers::posts::CommentRequest,
            crate::presentation::http::controllers::groups::CreateGroupRequest,
            crate::presentation::http::controllers::groups::UpdateGroupRequest,
            crate::application::dto::FeedPageDto,
            crate::application::dto::GroupFeedDto,
            crate::application::dto::ProfileFeedDto,
            crate::application::dto::PostDto,
            crate::application::dto::PostDetailDto,
            crate::application::dto::CommentDto,
            crate::application::dto::GroupDto,
            crate::application::dto::GroupRefDto,
            crate::application::dto::ProfileDto,
            crate::application::dto::FollowStatusDto
        )
    ),
    tags(
        (name = "Feeds", description = "Paginated lists of posts"),
        (name = "Posts", description = "Publishing, editing and commenting"),
        (name = "Groups", description = "Community groups"),
        (name = "Follows", description = "Author subscriptions"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Yatube API",
        description = "Blogging backend with groups, feeds and follows",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path = snapshot_path();
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string())
}
