//! # linkedsky 🔗🦋
//!
//! Share one link post to LinkedIn and Bluesky from your terminal.
//!
//! ## Overview
//!
//! linkedsky asks for a description, a few hashtags, a URL and the title of
//! the linked page, then offers to publish the result to each network. Each
//! network gets the post in its own shape: LinkedIn receives a UGC article
//! share with the hashtags inlined in the commentary, Bluesky receives a
//! rich-text post with tag facets and an external link card.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐
//! │     Config      │──▶│     Prompt      │──▶│     Publish     │
//! │ • .env + env    │   │ • Post fields   │   │ • Per network   │
//! │ • Required keys │   │ • y/n confirm   │   │ • Report        │
//! └─────────────────┘   └─────────────────┘   └─────────────────┘
//!                                                      │
//!                                  ┌───────────────────┴──────┐
//!                                  ▼                          ▼
//!                         ┌─────────────────┐        ┌─────────────────┐
//!                         │ api::linkedin   │        │ api::bluesky    │
//!                         │ • UGC payload   │        │ • Session login │
//!                         │ • Bearer POST   │        │ • Facets, embed │
//!                         └─────────────────┘        └─────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`] — Network publishers (LinkedIn, Bluesky) behind [`api::Publisher`]
//! - [`config`] — Environment configuration
//! - [`error`] — Error types
//! - [`models`] — Post content, hashtags, rich text, networks
//! - [`prompt`] — Interactive input
//! - [`publish`] — Orchestration and reporting
//!
//! ## Example
//!
//! ```no_run
//! use linkedsky::{Config, PostContent, api::{Client, Publisher}};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let post = PostContent::new("Nice find!", "#history #tech", "https://example.com/a", "Example")?;
//! for client in Client::all(&config)? {
//!     client.publish(&post).await?;
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::use_self)]
#![allow(clippy::doc_markdown)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod prompt;
pub mod publish;

// Re-export main types for convenience
pub use api::{Client, PublishOutcome, Publisher};
pub use config::Config;
pub use error::{ConfigError, PromptError, PublishError};
pub use models::{HashtagToken, Network, PostContent};
pub use publish::{NetworkStatus, PublishReport};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
