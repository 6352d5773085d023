//! Bluesky (AT Protocol) API client

use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::BlueskyConfig;
use crate::error::PublishError;
use crate::models::{Facet, Network, PostContent, RichText};

use super::{PublishOutcome, Publisher};

const POST_COLLECTION: &str = "app.bsky.feed.post";
const EXTERNAL_EMBED_TYPE: &str = "app.bsky.embed.external";

/// Bluesky API client
///
/// Holds credentials only; a fresh session is created for every publish.
pub struct BlueskyClient {
    client: Client,
    pds_url: String,
    handle: String,
    password: String,
    lang: String,
}

/// Authenticated session returned by `createSession`
#[derive(Debug, Clone)]
pub struct Session {
    /// Access token for subsequent calls
    pub access_jwt: String,
    /// Account DID, used as the record repo
    pub did: String,
}

impl BlueskyClient {
    /// Create a client from config, reusing an existing HTTP client
    pub fn with_http(client: Client, config: &BlueskyConfig) -> Self {
        Self {
            client,
            pds_url: config.pds_url.trim_end_matches('/').to_string(),
            handle: config.username.clone(),
            password: config.password.clone(),
            lang: config.lang.clone(),
        }
    }

    /// Exchange handle and password for a session
    pub async fn login(&self) -> Result<Session, PublishError> {
        let url = format!("{}/xrpc/com.atproto.server.createSession", self.pds_url);

        let request = CreateSessionRequest {
            identifier: &self.handle,
            password: &self.password,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| PublishError::Authentication(format!("Failed to reach {}: {}", self.pds_url, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(PublishError::Authentication(format!(
                "Bluesky login failed ({}): {}",
                status, error_text
            )));
        }

        let session: CreateSessionResponse = response
            .json()
            .await
            .map_err(|e| PublishError::Authentication(format!("Failed to parse login response: {}", e)))?;

        debug!("Logged in to Bluesky as {} ({})", session.handle, session.did);

        Ok(Session {
            access_jwt: session.access_jwt,
            did: session.did,
        })
    }

    /// Submit a post record for an existing session
    pub async fn create_post(
        &self,
        session: &Session,
        record: &PostRecord,
    ) -> Result<PublishOutcome, PublishError> {
        let url = format!("{}/xrpc/com.atproto.repo.createRecord", self.pds_url);

        let request = CreateRecordRequest {
            repo: &session.did,
            collection: POST_COLLECTION,
            record,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", session.access_jwt))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Bluesky API response {}: {}", status, body);
            warn!("Bluesky rejected the post with status {}", status);
            return Ok(PublishOutcome::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        debug!("Bluesky API response: {}", body);

        let created: CreateRecordResponse = serde_json::from_str(&body)
            .map_err(|e| PublishError::InvalidResponse(format!("createRecord: {}", e)))?;

        Ok(PublishOutcome::Published {
            reference: Some(created.uri),
        })
    }
}

impl Publisher for BlueskyClient {
    fn network(&self) -> Network {
        Network::Bluesky
    }

    async fn publish(&self, content: &PostContent) -> Result<PublishOutcome, PublishError> {
        // Without a session there is nothing to post with
        let session = self.login().await?;

        info!("Posting link to Bluesky as {}", self.handle);

        let record = build_record(content, &self.lang);
        self.create_post(&session, &record).await
    }
}

/// Rich text for a post: description, then `" "` and a tag run per hashtag
pub fn build_rich_text(content: &PostContent) -> RichText {
    RichText::new()
        .text(&content.description)
        .hashtags(&content.hashtag_tokens())
}

/// External link card; its own description stays empty
pub fn build_embed(content: &PostContent) -> ExternalEmbed {
    ExternalEmbed {
        r#type: EXTERNAL_EMBED_TYPE,
        external: External {
            uri: content.url.clone(),
            title: content.title.clone(),
            description: String::new(),
        },
    }
}

/// Full `app.bsky.feed.post` record, stamped with the current time
pub fn build_record(content: &PostContent, lang: &str) -> PostRecord {
    let rich_text = build_rich_text(content);
    let facets = rich_text.facets();

    PostRecord {
        r#type: POST_COLLECTION,
        text: rich_text.build_text(),
        facets: if facets.is_empty() { None } else { Some(facets) },
        embed: build_embed(content),
        langs: vec![lang.to_string()],
        created_at: Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
    }
}

// ==================== API Types ====================

#[derive(Debug, Serialize)]
struct CreateSessionRequest<'a> {
    identifier: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateSessionResponse {
    #[serde(rename = "accessJwt")]
    access_jwt: String,
    did: String,
    handle: String,
}

#[derive(Debug, Serialize)]
struct CreateRecordRequest<'a, T> {
    repo: &'a str,
    collection: &'a str,
    record: &'a T,
}

#[derive(Debug, Deserialize)]
struct CreateRecordResponse {
    uri: String,
    #[allow(dead_code)]
    cid: String,
}

/// `app.bsky.feed.post` record
#[derive(Debug, Clone, Serialize)]
pub struct PostRecord {
    #[serde(rename = "$type")]
    r#type: &'static str,
    /// Flattened post text
    pub text: String,
    /// Hashtag facets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facets: Option<Vec<Facet>>,
    /// Link card
    pub embed: ExternalEmbed,
    /// Language tags
    pub langs: Vec<String>,
    /// RFC 3339 creation time
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// `app.bsky.embed.external`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalEmbed {
    #[serde(rename = "$type")]
    r#type: &'static str,
    /// Link details
    pub external: External,
}

/// Link preview data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct External {
    /// Linked URL
    pub uri: String,
    /// Link title
    pub title: String,
    /// Always empty; the caption lives in the post text
    pub description: String,
}
