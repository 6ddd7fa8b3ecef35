// src/domain/post/specifications.rs
use crate::domain::post::entity::Post;
use crate::domain::user::UserId;

pub struct CanEditPostSpec<'a> {
    post: &'a Post,
    user_id: UserId,
}

impl<'a> CanEditPostSpec<'a> {
    pub fn new(post: &'a Post, user_id: UserId) -> Self {
        Self { post, user_id }
    }

    pub fn is_satisfied(&self) -> bool {
        self.post.is_authored_by(self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::value_objects::{PostId, PostText};
    use chrono::Utc;

    fn post_by(author: i64) -> Post {
        Post {
            id: PostId::new(1).unwrap(),
            text: PostText::new("text").unwrap(),
            author_id: UserId::new(author).unwrap(),
            group_id: None,
            pub_date: Utc::now(),
        }
    }

    #[test]
    fn only_the_author_may_edit() {
        let post = post_by(1);
        assert!(CanEditPostSpec::new(&post, UserId::new(1).unwrap()).is_satisfied());
        assert!(!CanEditPostSpec::new(&post, UserId::new(2).unwrap()).is_satisfied());
    }
}
