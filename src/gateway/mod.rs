//! Boundary to the external text-generation service
//!
//! The creation controller only talks to a [`CardGateway`]. The production
//! implementation calls the Anthropic Messages API; tests use a scripted
//! gateway instead.

pub mod anthropic;
#[cfg(test)]
pub mod mock;
pub mod prompt;

use async_trait::async_trait;
use thiserror::Error;

use crate::flashcards::{Card, GenerationRequest, LanguagePair};

pub use anthropic::AnthropicGateway;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream error: {status} - {message}")]
    Upstream { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Expected {expected} cards, upstream returned {actual}")]
    CountMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, GatewayError>;

/// A source of generated cards and single-word translations.
///
/// Calls are never retried, and a failed call leaves no local state
/// behind.
#[async_trait]
pub trait CardGateway: Send + Sync {
    /// Short name for log lines
    fn name(&self) -> &str;

    /// Ask for exactly `request.count` cards on `request.topic`.
    /// Anything other than a clean list of that many non-empty pairs is an
    /// error; a partial batch is never returned.
    async fn generate_batch(&self, request: &GenerationRequest) -> Result<Vec<Card>>;

    /// Translate one non-empty word. Returns the trimmed translation.
    async fn translate_one(&self, word: &str, pair: LanguagePair) -> Result<String>;
}
