// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{feeds, follows, groups, posts},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Router with every API route, allowing any CORS origin.
pub fn build_router(state: HttpState) -> Router {
    build_router_with_origins(state, &[])
}

/// Router restricted to `allowed_origins` for CORS. An empty list, or one
/// containing `*`, allows any origin.
pub fn build_router_with_origins(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/openapi.json", get(openapi::serve_openapi))
        .route("/health", get(health))
        .route(
            "/api/v1/posts",
            get(feeds::index_feed).post(posts::create_post),
        )
        .route(
            "/api/v1/posts/{id}",
            get(posts::post_detail).put(posts::edit_post),
        )
        .route("/api/v1/posts/{id}/comments", post(posts::add_comment))
        .route(
            "/api/v1/groups",
            get(groups::list_groups).post(groups::create_group),
        )
        .route("/api/v1/groups/{slug}", put(groups::update_group))
        .route("/api/v1/groups/{slug}/posts", get(feeds::group_feed))
        .route("/api/v1/profiles/{username}", get(feeds::profile_feed))
        .route(
            "/api/v1/profiles/{username}/follow",
            post(follows::follow).delete(follows::unfollow),
        )
        .route("/api/v1/follow", get(feeds::follow_feed))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if allowed_origins.is_empty() || allowed_origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
