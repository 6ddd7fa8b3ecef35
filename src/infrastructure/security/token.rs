// src/infrastructure/security/token.rs
use std::{collections::HashMap, sync::Arc};

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::security::Authenticator,
    },
    domain::user::{UserRepository, Username},
};
use async_trait::async_trait;

/// Resolves bearer tokens from a fixed table loaded at startup. The user
/// record is read on every request so staff changes take effect at once.
#[derive(Clone)]
pub struct StaticTokenAuthenticator {
    tokens: Arc<HashMap<String, Username>>,
    user_repo: Arc<dyn UserRepository>,
}

impl StaticTokenAuthenticator {
    pub fn new(
        tokens: impl IntoIterator<Item = (String, Username)>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            tokens: Arc::new(tokens.into_iter().collect()),
            user_repo,
        }
    }
}

#[async_trait]
impl Authenticator for StaticTokenAuthenticator {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let username = self
            .tokens
            .get(token)
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))?;

        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("token owner no longer exists"))?;

        Ok(user.into())
    }
}
