//! Link post model (shared by every network)

use crate::error::ContentError;

/// The post gathered from the operator
///
/// All four fields are kept exactly as typed. Networks decide how to render
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent {
    /// Main text of the post
    pub description: String,
    /// Space separated hashtags, each optionally prefixed with `#`
    pub hashtags: String,
    /// URL of the linked article
    pub url: String,
    /// Title of the linked article
    pub title: String,
}

/// One whitespace separated entry of [`PostContent::hashtags`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashtagToken {
    /// Token as typed, e.g. `#rust`
    pub display: String,
    /// Bare tag name with every `#` removed, e.g. `rust`
    pub tag: String,
}

impl HashtagToken {
    /// Build a token from its display text
    pub fn new(display: &str) -> Self {
        Self {
            display: display.to_string(),
            tag: display.replace('#', ""),
        }
    }
}

impl PostContent {
    /// Create post content, rejecting empty fields
    pub fn new(
        description: impl Into<String>,
        hashtags: impl Into<String>,
        url: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self, ContentError> {
        let content = Self {
            description: description.into(),
            hashtags: hashtags.into(),
            url: url.into(),
            title: title.into(),
        };

        for (name, value) in [
            ("description", &content.description),
            ("hashtags", &content.hashtags),
            ("url", &content.url),
            ("title", &content.title),
        ] {
            if value.is_empty() {
                return Err(ContentError(name));
            }
        }

        Ok(content)
    }

    /// Split the hashtags on whitespace, keeping their original order
    pub fn hashtag_tokens(&self) -> Vec<HashtagToken> {
        hashtag_tokens(&self.hashtags)
    }

    /// Description followed by the raw hashtag string
    pub fn commentary(&self) -> String {
        format!("{} {}", self.description, self.hashtags)
    }
}

/// Split a hashtag string into tokens
///
/// Whitespace-only input yields no tokens.
pub fn hashtag_tokens(hashtags: &str) -> Vec<HashtagToken> {
    hashtags.split_whitespace().map(HashtagToken::new).collect()
}
