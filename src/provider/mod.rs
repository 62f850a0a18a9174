//! Language-model provider abstraction.
//!
//! The orchestrator only needs "prompt in, first text block out", so the
//! trait is kept that small. Retries are deliberately absent.

pub mod anthropic;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

pub use anthropic::{AnthropicConfig, AnthropicProvider};
pub use mock::MockProvider;

/// Error type for provider calls.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Short machine-readable label for diagnostics
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::Network(_) => "network",
            ProviderError::Unauthorized(_) => "unauthorized",
            ProviderError::RateLimited(_) => "rate_limited",
            ProviderError::Api { .. } => "api",
            ProviderError::InvalidResponse(_) => "invalid_response",
        }
    }
}

/// A text-completion provider.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Send `prompt` as a single user message and return the first text
    /// segment of the reply.
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Name used in logs.
    fn name(&self) -> &str;
}
