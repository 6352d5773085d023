//! Rich text for Bluesky posts
//!
//! A post body is a list of runs. Plain runs are just text; tag runs carry a
//! hashtag facet. Bluesky wants the flattened text plus facets that point
//! into it by UTF-8 byte offset, so [`RichText::facets`] walks the runs and
//! tracks the byte position as it goes.

use serde::Serialize;

use super::post::HashtagToken;

/// A span of post text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextRun {
    /// Plain text
    Text(String),
    /// Hashtag: `text` is shown, `tag` is the facet value
    Tag {
        /// Display text (usually with the leading `#`)
        text: String,
        /// Tag value without `#`
        tag: String,
    },
}

impl TextRun {
    /// Text this run contributes to the post body
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) | Self::Tag { text, .. } => text,
        }
    }
}

/// Ordered list of runs, built with chained calls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    runs: Vec<TextRun>,
}

/// Byte range of a facet inside the post text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ByteSlice {
    /// Inclusive start
    #[serde(rename = "byteStart")]
    pub byte_start: usize,
    /// Exclusive end
    #[serde(rename = "byteEnd")]
    pub byte_end: usize,
}

/// `app.bsky.richtext.facet`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facet {
    /// Where the facet applies
    pub index: ByteSlice,
    /// What the facet means
    pub features: Vec<FacetFeature>,
}

/// Facet feature; only hashtags are produced here
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "$type")]
pub enum FacetFeature {
    /// `app.bsky.richtext.facet#tag`
    #[serde(rename = "app.bsky.richtext.facet#tag")]
    Tag {
        /// Tag value without `#`
        tag: String,
    },
}

impl RichText {
    /// Empty rich text
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plain run
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.runs.push(TextRun::Text(text.into()));
        self
    }

    /// Append a hashtag run
    pub fn tag(mut self, text: impl Into<String>, tag: impl Into<String>) -> Self {
        self.runs.push(TextRun::Tag {
            text: text.into(),
            tag: tag.into(),
        });
        self
    }

    /// Append `" "` then a tag run for each token, in order
    pub fn hashtags(self, tokens: &[HashtagToken]) -> Self {
        tokens
            .iter()
            .fold(self, |rt, token| rt.text(" ").tag(&token.display, &token.tag))
    }

    /// The runs, in order
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Flattened post text
    pub fn build_text(&self) -> String {
        self.runs.iter().map(TextRun::as_str).collect()
    }

    /// Tag facets with byte offsets into [`Self::build_text`]
    pub fn facets(&self) -> Vec<Facet> {
        let mut facets = Vec::new();
        let mut offset = 0;

        for run in &self.runs {
            let len = run.as_str().len();
            if let TextRun::Tag { tag, .. } = run {
                facets.push(Facet {
                    index: ByteSlice {
                        byte_start: offset,
                        byte_end: offset + len,
                    },
                    features: vec![FacetFeature::Tag { tag: tag.clone() }],
                });
            }
            offset += len;
        }

        facets
    }
}
