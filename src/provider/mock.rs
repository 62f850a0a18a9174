//! Scripted provider for tests and offline runs.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{ProviderError, TextProvider};

/// Provider that returns a fixed reply or a fixed error.
#[derive(Debug, Clone)]
pub struct MockProvider {
    reply: Result<String, ProviderError>,
    calls: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Always reply with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Always fail with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self {
            reply: Err(error),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of `complete` calls so far, shared across clones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextProvider for MockProvider {
    async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }

    fn name(&self) -> &str {
        "mock"
    }
}
