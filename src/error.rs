//! Error types for linkedsky

use thiserror::Error;

/// Configuration could not be built from the environment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set at all (an empty value is fine)
    #[error("{0} is mandatory")]
    MissingVar(String),

    /// An optional variable is set but cannot be parsed
    #[error("{key} has an invalid value: {value:?}")]
    InvalidValue {
        /// Variable name
        key: String,
        /// Raw value found in the environment
        value: String,
    },
}

/// A publish attempt failed before the network could accept or reject the post
#[derive(Error, Debug)]
pub enum PublishError {
    /// Login was refused, so no post was submitted
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The request never got an HTTP answer (DNS, TLS, timeout, ...)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The network answered with something we could not understand
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Interactive input could not be read
#[derive(Error, Debug)]
pub enum PromptError {
    /// Reading stdin or writing the prompt failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended while an answer was still required
    #[error("Input closed before an answer was given")]
    Eof,
}

/// Validation failure when building post content outside the prompt loop
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0} must not be empty")]
pub struct ContentError(pub &'static str);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_var_names_key() {
        let err = ConfigError::MissingVar("BSKY_PASS".to_string());
        assert_eq!(err.to_string(), "BSKY_PASS is mandatory");
    }

    #[test]
    fn test_content_error_message() {
        assert_eq!(ContentError("title").to_string(), "title must not be empty");
    }
}
