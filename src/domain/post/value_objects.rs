// src/domain/post/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(pub i64);

impl PostId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("post id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PostId> for i64 {
    fn from(value: PostId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostText(String);

impl PostText {
    const PREVIEW_CHARS: usize = 15;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("post text cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first fifteen characters, used wherever a post needs a label.
    pub fn preview(&self) -> &str {
        match self.0.char_indices().nth(Self::PREVIEW_CHARS) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PostText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_is_fifteen_chars() {
        let text = PostText::new("Тестовый пост длиннее пятнадцати символов").unwrap();
        assert_eq!(text.preview(), "Тестовый пост д");
        assert_eq!(text.preview().chars().count(), 15);
    }

    #[test]
    fn short_text_preview_is_whole_text() {
        let text = PostText::new("short").unwrap();
        assert_eq!(text.preview(), "short");
    }

    #[test]
    fn blank_text_rejected() {
        assert!(PostText::new(" \n\t").is_err());
    }
}
