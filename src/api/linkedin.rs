//! LinkedIn UGC posts API client

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::LinkedInConfig;
use crate::error::PublishError;
use crate::models::{Network, PostContent};

use super::{PublishOutcome, Publisher};

/// Header LinkedIn uses to return the id of a created share
const RESTLI_ID_HEADER: &str = "x-restli-id";

/// LinkedIn API client
pub struct LinkedInClient {
    client: Client,
    api_url: String,
    author: String,
    token: String,
}

impl LinkedInClient {
    /// Create a client from config, reusing an existing HTTP client
    pub fn with_http(client: Client, config: &LinkedInConfig) -> Self {
        Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            author: config.author.clone(),
            token: config.token.clone(),
        }
    }
}

impl Publisher for LinkedInClient {
    fn network(&self) -> Network {
        Network::LinkedIn
    }

    async fn publish(&self, content: &PostContent) -> Result<PublishOutcome, PublishError> {
        let url = format!("{}/v2/ugcPosts", self.api_url);
        let payload = build_payload(&self.author, content);

        info!("Posting link to LinkedIn as {}", self.author);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let reference = response
            .headers()
            .get(RESTLI_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = response.text().await.unwrap_or_default();
        debug!("LinkedIn API response {}: {}", status, body);

        if status.is_success() {
            Ok(PublishOutcome::Published { reference })
        } else {
            warn!("LinkedIn rejected the post with status {}", status);
            Ok(PublishOutcome::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// Build the UGC post payload for a link share
///
/// The hashtags are appended to the commentary as typed; LinkedIn gets no
/// structured hashtag entities.
pub fn build_payload(author: &str, content: &PostContent) -> UgcPost {
    UgcPost {
        author: author.to_string(),
        lifecycle_state: "PUBLISHED",
        specific_content: SpecificContent {
            share_content: ShareContent {
                share_commentary: TextValue {
                    text: content.commentary(),
                },
                share_media_category: "ARTICLE",
                media: vec![ShareMedia {
                    status: "READY",
                    original_url: content.url.clone(),
                    title: TextValue {
                        text: content.title.clone(),
                    },
                }],
            },
        },
        visibility: Visibility {
            member_network_visibility: "PUBLIC",
        },
    }
}

// ==================== API Types ====================

/// Body of `POST /v2/ugcPosts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UgcPost {
    author: String,
    #[serde(rename = "lifecycleState")]
    lifecycle_state: &'static str,
    #[serde(rename = "specificContent")]
    specific_content: SpecificContent,
    visibility: Visibility,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct SpecificContent {
    #[serde(rename = "com.linkedin.ugc.ShareContent")]
    share_content: ShareContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ShareContent {
    #[serde(rename = "shareCommentary")]
    share_commentary: TextValue,
    #[serde(rename = "shareMediaCategory")]
    share_media_category: &'static str,
    media: Vec<ShareMedia>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ShareMedia {
    status: &'static str,
    #[serde(rename = "originalUrl")]
    original_url: String,
    title: TextValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct TextValue {
    text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Visibility {
    #[serde(rename = "com.linkedin.ugc.MemberNetworkVisibility")]
    member_network_visibility: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::http_client;
    use mockito::Matcher;
    use std::time::Duration;
    use serde_json::json;

    fn sample() -> PostContent {
        PostContent::new("Nice find!", "#history #tech", "https://example.com/a", "Example")
            .unwrap()
    }

    fn client_for(server: &mockito::ServerGuard) -> LinkedInClient {
        LinkedInClient::with_http(
            http_client(Duration::from_secs(5)).unwrap(),
            &LinkedInConfig {
                author: "urn:li:person:42".into(),
                token: "secret".into(),
                api_url: server.url(),
            },
        )
    }

    #[test]
    fn test_payload_shape() {
        let payload = serde_json::to_value(build_payload("urn:li:person:42", &sample())).unwrap();
        assert_eq!(
            payload,
            json!({
                "author": "urn:li:person:42",
                "lifecycleState": "PUBLISHED",
                "specificContent": {
                    "com.linkedin.ugc.ShareContent": {
                        "shareCommentary": { "text": "Nice find! #history #tech" },
                        "shareMediaCategory": "ARTICLE",
                        "media": [{
                            "status": "READY",
                            "originalUrl": "https://example.com/a",
                            "title": { "text": "Example" }
                        }]
                    }
                },
                "visibility": { "com.linkedin.ugc.MemberNetworkVisibility": "PUBLIC" }
            })
        );
    }

    #[test]
    fn test_commentary_is_not_trimmed_or_parsed() {
        let post = PostContent::new("  spaced ", "##odd  tags", "u", "t").unwrap();
        let payload = build_payload("a", &post);
        assert_eq!(
            payload.specific_content.share_content.share_commentary.text,
            "  spaced  ##odd  tags"
        );
    }

    #[test]
    fn test_payload_is_deterministic() {
        let first = serde_json::to_string(&build_payload("a", &sample())).unwrap();
        let second = serde_json::to_string(&build_payload("a", &sample())).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_publish_sends_authorized_json() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v2/ugcPosts")
            .match_header("authorization", "Bearer secret")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "author": "urn:li:person:42",
                "specificContent": {
                    "com.linkedin.ugc.ShareContent": {
                        "shareCommentary": { "text": "Nice find! #history #tech" }
                    }
                }
            })))
            .with_status(201)
            .with_header(RESTLI_ID_HEADER, "urn:li:share:7")
            .create_async()
            .await;

        let outcome = client_for(&server).publish(&sample()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            outcome,
            PublishOutcome::Published {
                reference: Some("urn:li:share:7".into())
            }
        );
    }

    #[tokio::test]
    async fn test_error_status_is_not_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v2/ugcPosts")
            .with_status(401)
            .with_body(r#"{"message":"Invalid access token"}"#)
            .create_async()
            .await;

        let outcome = client_for(&server).publish(&sample()).await.unwrap();

        assert_eq!(
            outcome,
            PublishOutcome::Rejected {
                status: 401,
                body: r#"{"message":"Invalid access token"}"#.into()
            }
        );
        assert!(!outcome.is_published());
    }
}
