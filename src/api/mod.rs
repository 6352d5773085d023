//! API clients for social networks

pub mod bluesky;
pub mod linkedin;

use std::time::Duration;

use crate::config::Config;
use crate::error::PublishError;
use crate::models::{Network, PostContent};

/// What happened to a post the network received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The network accepted the post
    Published {
        /// Share URN or record URI, when the network returned one
        reference: Option<String>,
    },
    /// The network answered with a non-success status
    Rejected {
        /// HTTP status code
        status: u16,
        /// Response body, as returned
        body: String,
    },
}

impl PublishOutcome {
    /// Whether the post went out
    pub const fn is_published(&self) -> bool {
        matches!(self, Self::Published { .. })
    }
}

/// Unified "publish a link post" capability
#[allow(async_fn_in_trait)]
pub trait Publisher {
    /// Which network this publisher talks to
    fn network(&self) -> Network;

    /// Publish the post
    ///
    /// A rejection by the network is reported as [`PublishOutcome::Rejected`]
    /// rather than an error; errors mean the post could not be attempted or
    /// no answer came back.
    async fn publish(&self, content: &PostContent) -> Result<PublishOutcome, PublishError>;
}

/// Unified client that wraps network-specific implementations
pub enum Client {
    /// LinkedIn UGC posts client
    LinkedIn(linkedin::LinkedInClient),
    /// Bluesky AT Protocol client
    Bluesky(bluesky::BlueskyClient),
}

impl Client {
    /// Build the client for `network` from the loaded configuration
    pub fn for_network(network: Network, config: &Config) -> Result<Self, PublishError> {
        let http = http_client(config.http_timeout)?;
        Ok(match network {
            Network::LinkedIn => Self::LinkedIn(linkedin::LinkedInClient::with_http(
                http,
                &config.linkedin,
            )),
            Network::Bluesky => {
                Self::Bluesky(bluesky::BlueskyClient::with_http(http, &config.bluesky))
            }
        })
    }

    /// Build a client for every supported network, in prompting order
    pub fn all(config: &Config) -> Result<Vec<Self>, PublishError> {
        Network::all()
            .iter()
            .map(|network| Self::for_network(*network, config))
            .collect()
    }
}

impl Publisher for Client {
    fn network(&self) -> Network {
        match self {
            Client::LinkedIn(c) => c.network(),
            Client::Bluesky(c) => c.network(),
        }
    }

    async fn publish(&self, content: &PostContent) -> Result<PublishOutcome, PublishError> {
        match self {
            Client::LinkedIn(c) => c.publish(content).await,
            Client::Bluesky(c) => c.publish(content).await,
        }
    }
}

/// HTTP client shared by the adapters
pub fn http_client(timeout: Duration) -> Result<reqwest::Client, PublishError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("linkedsky/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}
