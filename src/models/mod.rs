//! Data models for linkedsky

mod network;
mod post;
pub mod richtext;

pub use network::Network;
pub use post::{HashtagToken, PostContent, hashtag_tokens};
pub use richtext::{Facet, FacetFeature, RichText, TextRun};
