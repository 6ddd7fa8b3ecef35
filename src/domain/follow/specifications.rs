// src/domain/follow/specifications.rs
use crate::domain::user::UserId;

pub struct CanFollowSpec {
    user_id: UserId,
    author_id: UserId,
}

impl CanFollowSpec {
    pub fn new(user_id: UserId, author_id: UserId) -> Self {
        Self { user_id, author_id }
    }

    pub fn is_satisfied(&self) -> bool {
        self.user_id != self.author_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nobody_follows_themselves() {
        let me = UserId::new(3).unwrap();
        let other = UserId::new(4).unwrap();
        assert!(!CanFollowSpec::new(me, me).is_satisfied());
        assert!(CanFollowSpec::new(me, other).is_satisfied());
    }
}
