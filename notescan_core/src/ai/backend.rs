use async_trait::async_trait;
use std::sync::Arc;

use super::dto::{Completion, CompletionOptions};
use super::error::BackendError;
use super::tokens::TokenSink;

/// A loaded generative model able to complete a prompt.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
        tokens: &TokenSink,
    ) -> Result<Completion, BackendError>;
}

/// Acquires a [`CompletionBackend`]. Called at most once per gate.
///
/// `Ok(None)` means no backend is configured on this host, which is not an
/// error; the gate settles on the extractive fallback either way.
#[async_trait]
pub trait BackendProvider: Send + Sync {
    async fn acquire(&self) -> anyhow::Result<Option<Arc<dyn CompletionBackend>>>;
}

/// Provider for hosts without a generative model.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBackend;

#[async_trait]
impl BackendProvider for NoBackend {
    async fn acquire(&self) -> anyhow::Result<Option<Arc<dyn CompletionBackend>>> {
        Ok(None)
    }
}
