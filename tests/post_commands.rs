// tests/post_commands.rs
use yatube_core::application::commands::{
    comments::AddCommentCommand,
    posts::{CreatePostCommand, EditPostCommand},
};
use yatube_core::application::error::ApplicationError;

mod support;

use support::{AUTHOR, OTHER, READER, TestApp, fixed_now};

#[tokio::test]
async fn post_takes_the_clock_time_and_author() {
    let app = TestApp::new(10).await;
    let post = app.post(AUTHOR, "Первый пост", None).await;
    assert_eq!(post.author, AUTHOR);
    assert!(post.pub_date > fixed_now());
    assert!(post.group.is_none());
}

#[tokio::test]
async fn unknown_group_is_rejected() {
    let app = TestApp::new(10).await;
    let author = app.user(AUTHOR).await;
    let err = app
        .services
        .post_commands
        .create_post(
            &author,
            CreatePostCommand {
                text: "lost".into(),
                group_id: Some(404),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn only_the_author_edits() {
    let app = TestApp::new(10).await;
    let post = app.post(AUTHOR, "original", None).await;
    let other = app.user(OTHER).await;

    let err = app
        .services
        .post_commands
        .edit_post(
            &other,
            EditPostCommand {
                id: post.id,
                text: "hijacked".into(),
                group_id: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn edit_keeps_date_and_can_change_group() {
    let app = TestApp::new(10).await;
    let group = app.group("Travel", None).await;
    let post = app.post(AUTHOR, "original", Some(group.id)).await;
    let author = app.user(AUTHOR).await;
    let commands = &app.services.post_commands;

    let edited = commands
        .edit_post(
            &author,
            EditPostCommand {
                id: post.id,
                text: "edited".into(),
                group_id: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.text, "edited");
    assert_eq!(edited.pub_date, post.pub_date);
    assert!(edited.group.is_none());

    let missing = commands
        .edit_post(
            &author,
            EditPostCommand {
                id: 999,
                text: "x".into(),
                group_id: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(missing, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn detail_lists_comments_newest_first() {
    let app = TestApp::new(10).await;
    let post = app.post(AUTHOR, "discuss", None).await;
    app.post(AUTHOR, "another", None).await;
    let reader = app.user(READER).await;
    let other = app.user(OTHER).await;

    for (actor, text) in [(&reader, "first!"), (&other, "second")] {
        app.services
            .comment_commands
            .add_comment(
                actor,
                AddCommentCommand {
                    post_id: post.id,
                    text: text.into(),
                },
            )
            .await
            .unwrap();
    }

    let detail = app.services.post_queries.post_detail(post.id).await.unwrap();
    assert_eq!(detail.post.id, post.id);
    assert_eq!(detail.author_post_count, 2);
    let comments: Vec<(&str, &str)> = detail
        .comments
        .iter()
        .map(|comment| (comment.author.as_str(), comment.text.as_str()))
        .collect();
    assert_eq!(comments, vec![(OTHER, "second"), (READER, "first!")]);
}

#[tokio::test]
async fn commenting_needs_an_existing_post_and_text() {
    let app = TestApp::new(10).await;
    let reader = app.user(READER).await;
    let comments = &app.services.comment_commands;

    let err = comments
        .add_comment(
            &reader,
            AddCommentCommand {
                post_id: 12,
                text: "hello".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let err = comments
        .add_comment(
            &reader,
            AddCommentCommand {
                post_id: 0,
                text: "hello".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let post = app.post(AUTHOR, "quiet", None).await;
    let err = comments
        .add_comment(
            &reader,
            AddCommentCommand {
                post_id: post.id,
                text: "   ".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(_)));
}

#[tokio::test]
async fn editing_a_missing_or_malformed_id_is_not_found() {
    let app = TestApp::new(10).await;
    let author = app.user(AUTHOR).await;
    for id in [-3, 0, 999] {
        let err = app
            .services
            .post_commands
            .edit_post(
                &author,
                EditPostCommand {
                    id,
                    text: "rewrite".into(),
                    group_id: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(_)), "id={id}");
    }
}
