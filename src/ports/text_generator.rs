//! Text Generator Port - interface to the external generative model.
//!
//! The gateway holds exactly one of these behind an `Arc` and submits one
//! prompt per request, synchronously. No streaming, no retries: a failed
//! call surfaces as a single error.

use async_trait::async_trait;

use crate::domain::Prompt;

/// Port for single-shot text generation.
///
/// Implementations connect to an external service (or a test double) and
/// translate between its API and [`Prompt`].
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for one prompt.
    async fn generate(&self, prompt: Prompt) -> Result<String, GenerationError>;

    /// Provider name and model identifier.
    fn info(&self) -> GeneratorInfo;
}

/// Provider metadata for logs and the liveness payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorInfo {
    /// Provider name (e.g. "google").
    pub name: String,
    /// Model identifier (e.g. "gemini-1.5-flash").
    pub model: String,
}

impl GeneratorInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Upstream generation errors.
///
/// The HTTP layer collapses all of these into one generic 500; the variants
/// exist so logs can tell causes apart.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// API key rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Rate limited or out of quota.
    #[error("rate limited")]
    RateLimited,

    /// The provider rejected the request payload.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Provider is down or returned a server error.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// Network failure (connect, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// Response body could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// The provider returned no usable text.
    #[error("empty response from model")]
    EmptyResponse,
}

impl GenerationError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
