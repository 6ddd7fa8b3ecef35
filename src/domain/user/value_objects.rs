// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("user id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub const MAX_LENGTH: usize = 150;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("username cannot be empty".into()));
        }
        if value.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::Validation(format!(
                "username must be at most {} characters long",
                Self::MAX_LENGTH
            )));
        }
        if !value
            .chars()
            .all(|ch| ch.is_alphanumeric() || matches!(ch, '@' | '.' | '+' | '-' | '_'))
        {
            return Err(DomainError::Validation(
                "username may contain only letters, digits and @/./+/-/_".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_accepts_django_style_names() {
        assert!(Username::new("leo.tolstoy+1@ya_ru-x").is_ok());
        assert!(Username::new("пользователь").is_ok());
    }

    #[test]
    fn username_rejects_blank_and_symbols() {
        assert!(Username::new("   ").is_err());
        assert!(Username::new("bad name").is_err());
        assert!(Username::new("semi;colon").is_err());
        assert!(Username::new("x".repeat(151)).is_err());
    }

    #[test]
    fn user_id_must_be_positive() {
        assert!(UserId::new(0).is_err());
        assert_eq!(i64::from(UserId::new(7).unwrap()), 7);
    }
}
