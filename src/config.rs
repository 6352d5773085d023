//! Configuration module for linkedsky
//!
//! Everything comes from the process environment (optionally seeded from a
//! local `.env` file). The four credential variables are mandatory; the rest
//! have defaults.

use std::time::Duration;

use crate::error::ConfigError;

/// LinkedIn author URN variable
pub const LINKEDIN_AUTHOR: &str = "LINKEDIN_AUTHOR";
/// LinkedIn bearer token variable
pub const LINKEDIN_TOKEN: &str = "LINKEDIN_TOKEN";
/// Bluesky handle variable
pub const BSKY_USER: &str = "BSKY_USER";
/// Bluesky (app) password variable
pub const BSKY_PASS: &str = "BSKY_PASS";

/// Required variables, in the order they are checked
pub const REQUIRED_VARS: [&str; 4] = [LINKEDIN_AUTHOR, LINKEDIN_TOKEN, BSKY_USER, BSKY_PASS];

/// Default LinkedIn API base URL
pub const DEFAULT_LINKEDIN_API_URL: &str = "https://api.linkedin.com";
/// Default Bluesky PDS URL
pub const DEFAULT_PDS_URL: &str = "https://bsky.social";
/// Default language tag attached to Bluesky posts
pub const DEFAULT_POST_LANG: &str = "en-US";
/// Default HTTP timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// LinkedIn credentials and endpoint
#[derive(Clone)]
pub struct LinkedInConfig {
    /// Author URN, e.g. `urn:li:person:abc123`
    pub author: String,
    /// OAuth bearer token
    pub token: String,
    /// API base URL
    pub api_url: String,
}

/// Bluesky credentials and endpoint
#[derive(Clone)]
pub struct BlueskyConfig {
    /// Handle or DID used to log in
    pub username: String,
    /// Account or app password
    pub password: String,
    /// PDS base URL
    pub pds_url: String,
    /// Language tag for created posts
    pub lang: String,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// LinkedIn settings
    pub linkedin: LinkedInConfig,
    /// Bluesky settings
    pub bluesky: BlueskyConfig,
    /// Timeout applied to every HTTP request
    pub http_timeout: Duration,
}

// Secrets stay out of debug output (and therefore out of logs)
impl std::fmt::Debug for LinkedInConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkedInConfig")
            .field("author", &self.author)
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl std::fmt::Debug for BlueskyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlueskyConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("pds_url", &self.pds_url)
            .field("lang", &self.lang)
            .finish()
    }
}

impl Config {
    /// Load config from the process environment
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
        })
    }

    /// Load config from an arbitrary key lookup
    ///
    /// Fails on the first required key that is absent; presence is all that
    /// is checked, so an empty value passes.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        validate_required(&lookup, &REQUIRED_VARS)?;

        let required = |key: &str| lookup(key).ok_or_else(|| ConfigError::MissingVar(key.to_string()));
        let optional = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map_or_else(|| default.to_string(), |v| v.trim().trim_end_matches('/').to_string())
        };

        let timeout_secs = match lookup("LINKEDSKY_HTTP_TIMEOUT_SECS") {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: "LINKEDSKY_HTTP_TIMEOUT_SECS".to_string(),
                    value: raw.clone(),
                })?,
            _ => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            linkedin: LinkedInConfig {
                author: required(LINKEDIN_AUTHOR)?,
                token: required(LINKEDIN_TOKEN)?,
                api_url: optional("LINKEDIN_API_URL", DEFAULT_LINKEDIN_API_URL),
            },
            bluesky: BlueskyConfig {
                username: required(BSKY_USER)?,
                password: required(BSKY_PASS)?,
                pds_url: optional("BSKY_PDS_URL", DEFAULT_PDS_URL),
                lang: optional("LINKEDSKY_POST_LANG", DEFAULT_POST_LANG),
            },
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Confirm every key in `keys` is present, stopping at the first missing one
pub fn validate_required<F>(lookup: &F, keys: &[&str]) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    for key in keys {
        if lookup(*key).is_none() {
            return Err(ConfigError::MissingVar((*key).to_string()));
        }
    }
    Ok(())
}
