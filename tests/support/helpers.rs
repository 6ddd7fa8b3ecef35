// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use yatube_core::application::{
    commands::{
        groups::CreateGroupCommand,
        posts::CreatePostCommand,
        users::EnsureUserCommand,
    },
    dto::{AuthenticatedUser, GroupDto, PostDto},
    ports::time::Clock,
    services::{ApplicationServices, Repositories},
};
use yatube_core::domain::user::Username;
use yatube_core::infrastructure::{
    repositories::{
        InMemoryCommentRepository, InMemoryFollowRepository, InMemoryGroupRepository,
        InMemoryPostRepository, InMemoryStore, InMemoryUserRepository,
    },
    security::token::StaticTokenAuthenticator,
    util::TransliteratingSlugGenerator,
};
use yatube_core::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::SteppingClock;

pub const STAFF: &str = "admin";
pub const AUTHOR: &str = "leo";
pub const READER: &str = "anna";
pub const OTHER: &str = "mark";

/// Bearer token the test authenticator accepts for `username`.
pub fn token_for(username: &str) -> String {
    format!("{username}-token")
}

pub struct TestApp {
    pub services: Arc<ApplicationServices>,
}

impl TestApp {
    /// Services over a fresh in-memory store, with the staff user, the
    /// author, the reader and one more user already provisioned.
    pub async fn new(posts_per_page: usize) -> Self {
        Self::with_clock(posts_per_page, Arc::new(SteppingClock::default())).await
    }

    pub async fn with_clock(posts_per_page: usize, clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let users = Arc::new(InMemoryUserRepository::new(Arc::clone(&store)));
        let repos = Repositories {
            users: users.clone(),
            groups: Arc::new(InMemoryGroupRepository::new(Arc::clone(&store))),
            posts: Arc::new(InMemoryPostRepository::new(Arc::clone(&store))),
            comments: Arc::new(InMemoryCommentRepository::new(Arc::clone(&store))),
            follows: Arc::new(InMemoryFollowRepository::new(Arc::clone(&store))),
        };

        let names = [STAFF, AUTHOR, READER, OTHER];
        let tokens = names
            .iter()
            .map(|name| (token_for(name), Username::new(*name).unwrap()));
        let authenticator = Arc::new(StaticTokenAuthenticator::new(tokens, users));

        let services = Arc::new(ApplicationServices::new(
            repos,
            authenticator,
            clock,
            Arc::new(TransliteratingSlugGenerator),
            posts_per_page,
        ));

        for name in names {
            services
                .user_commands
                .ensure_user(EnsureUserCommand {
                    username: name.to_string(),
                    is_staff: name == STAFF,
                })
                .await
                .expect("provision user");
        }

        Self { services }
    }

    pub async fn user(&self, username: &str) -> AuthenticatedUser {
        self.services
            .authenticate(&token_for(username))
            .await
            .expect("known test user")
    }

    pub async fn group(&self, title: &str, slug: Option<&str>) -> GroupDto {
        let staff = self.user(STAFF).await;
        self.services
            .group_commands
            .create_group(
                &staff,
                CreateGroupCommand {
                    title: title.to_string(),
                    slug: slug.map(str::to_string),
                    description: format!("All about {title}"),
                },
            )
            .await
            .expect("create group")
    }

    pub async fn post(&self, author: &str, text: &str, group_id: Option<i64>) -> PostDto {
        let author = self.user(author).await;
        self.services
            .post_commands
            .create_post(
                &author,
                CreatePostCommand {
                    text: text.to_string(),
                    group_id,
                },
            )
            .await
            .expect("create post")
    }

    pub fn router(&self) -> axum::Router {
        build_router(HttpState {
            services: Arc::clone(&self.services),
        })
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_as(uri: &str, username: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token_for(username)))
        .body(Body::empty())
        .unwrap()
}

pub fn send_as(method: &str, uri: &str, username: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token_for(username)))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
    body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub async fn json_body(resp: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(resp).await).expect("json body")
}

/// Assert that a response is an `ErrorResponse` with the expected status and
/// reason phrase.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = json_body(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error);
    assert!(!msg_field.is_empty(), "expected non-empty message field");
}
