// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    posts_per_page: usize,
    allowed_origins: Vec<String>,
    accounts: Vec<AccountConfig>,
}

/// One pre-provisioned account and the bearer token that acts as it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountConfig {
    pub username: String,
    pub token: String,
    pub is_staff: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_POSTS_PER_PAGE: usize = 10;

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables, after letting a
    /// `.env` file populate them when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_source(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup. Unset keys take their
    /// defaults; set but malformed keys are errors.
    pub fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let posts_per_page = match lookup("POSTS_PER_PAGE") {
            Some(raw) => parse_posts_per_page(&raw)?,
            None => DEFAULT_POSTS_PER_PAGE,
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| split_list(&s))
            .unwrap_or_else(default_allowed_origins);

        let accounts = match lookup("AUTH_ACCOUNTS") {
            Some(raw) => split_list(&raw)
                .iter()
                .map(|entry| parse_account(entry))
                .collect::<Result<_, _>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            listen_addr,
            posts_per_page,
            allowed_origins,
            accounts,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub const fn posts_per_page(&self) -> usize {
        self.posts_per_page
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn accounts(&self) -> &[AccountConfig] {
        &self.accounts
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_posts_per_page(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::Invalid(format!(
            "POSTS_PER_PAGE must be a positive integer, got '{raw}'"
        ))),
    }
}

/// `username:token` or `username:token:staff`.
fn parse_account(entry: &str) -> Result<AccountConfig, ConfigError> {
    let invalid = || {
        ConfigError::Invalid(format!(
            "AUTH_ACCOUNTS entry '{entry}' must look like username:token[:staff]"
        ))
    };

    let mut parts = entry.split(':').map(str::trim);
    let username = parts.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
    let token = parts.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
    let is_staff = match parts.next() {
        None => false,
        Some("staff") => true,
        Some(_) => return Err(invalid()),
    };
    if parts.next().is_some() {
        return Err(invalid());
    }

    Ok(AccountConfig {
        username: username.to_owned(),
        token: token.to_owned(),
        is_staff,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.listen_addr(), "127.0.0.1:8080");
        assert_eq!(cfg.posts_per_page(), 10);
        assert_eq!(cfg.allowed_origins(), ["http://localhost:3000".to_string()]);
        assert!(cfg.accounts().is_empty());
    }

    #[test]
    fn posts_per_page_must_be_positive() {
        assert_eq!(config(&[("POSTS_PER_PAGE", "25")]).unwrap().posts_per_page(), 25);
        for bad in ["0", "-3", "ten", ""] {
            assert!(
                matches!(config(&[("POSTS_PER_PAGE", bad)]), Err(ConfigError::Invalid(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn accounts_are_parsed() {
        let cfg = config(&[("AUTH_ACCOUNTS", "leo:t1:staff, anna:t2")]).unwrap();
        assert_eq!(
            cfg.accounts(),
            [
                AccountConfig {
                    username: "leo".into(),
                    token: "t1".into(),
                    is_staff: true
                },
                AccountConfig {
                    username: "anna".into(),
                    token: "t2".into(),
                    is_staff: false
                },
            ]
        );
    }

    #[test]
    fn malformed_accounts_are_rejected() {
        for bad in ["leo", "leo:", ":tok", "leo:tok:admin", "leo:tok:staff:x"] {
            assert!(
                matches!(config(&[("AUTH_ACCOUNTS", bad)]), Err(ConfigError::Invalid(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn origins_are_split_and_trimmed() {
        let cfg = config(&[("ALLOWED_ORIGINS", "https://a.test, https://b.test,")]).unwrap();
        assert_eq!(cfg.allowed_origins(), ["https://a.test", "https://b.test"]);
    }
}
