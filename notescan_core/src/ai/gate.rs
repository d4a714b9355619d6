//! Routing between the generative backend and the extractive summarizer.
//!
//! The gate acquires its backend once, lazily, on first use. Concurrent
//! callers that arrive while acquisition is running wait for that attempt
//! instead of starting their own. Whatever the outcome, `summarize` always
//! produces a summary for non-empty input: backend failures of any kind fall
//! back to [`SummaryEngine`].

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::summary::dto::{LengthTier, SummaryResult};
use crate::summary::error::SummaryError;
use crate::summary::handler::SummaryEngine;
use crate::summary::segmenter::segment;

use super::backend::{BackendProvider, CompletionBackend};
use super::dto::{BackendState, GateConfig};
use super::error::BackendError;
use super::helpers::{build_summarization_prompt, summary_options};
use super::tokens::TokenSink;

/// Puts the state back to `Uninitialized` if an acquisition is dropped
/// before it settles, so the next caller's attempt is not reported as stuck.
struct CancelGuard<'a> {
    state: &'a AtomicU8,
    armed: bool,
}

impl<'a> CancelGuard<'a> {
    fn new(state: &'a AtomicU8) -> Self {
        Self { state, armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for CancelGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            log::warn!("Generative backend initialization was cancelled");
            self.state
                .store(BackendState::Uninitialized as u8, Ordering::Release);
        }
    }
}

pub struct BackendGate {
    engine: SummaryEngine,
    provider: Arc<dyn BackendProvider>,
    config: GateConfig,
    state: AtomicU8,
    backend: OnceCell<Option<Arc<dyn CompletionBackend>>>,
}

impl BackendGate {
    pub fn new(engine: SummaryEngine, provider: Arc<dyn BackendProvider>) -> Self {
        Self {
            engine,
            provider,
            config: GateConfig::default(),
            state: AtomicU8::new(BackendState::Uninitialized as u8),
            backend: OnceCell::new(),
        }
    }

    pub fn with_config(mut self, config: GateConfig) -> Self {
        self.config = config;
        self
    }

    pub fn state(&self) -> BackendState {
        BackendState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub fn engine(&self) -> &SummaryEngine {
        &self.engine
    }

    fn set_state(&self, state: BackendState) {
        self.state.store(state as u8, Ordering::Release);
    }

    /// Acquire the backend unless a previous call already settled the state.
    ///
    /// Returns the terminal state, `Ready` or `Fallback`.
    pub async fn initialize(&self) -> BackendState {
        self.backend.get_or_init(|| self.acquire()).await;
        self.state()
    }

    async fn acquire(&self) -> Option<Arc<dyn CompletionBackend>> {
        self.set_state(BackendState::Initializing);
        log::info!("Initializing generative backend");

        let mut guard = CancelGuard::new(&self.state);
        let acquired = self.provider.acquire().await;
        guard.disarm();

        match acquired {
            Ok(Some(backend)) => {
                self.set_state(BackendState::Ready);
                log::info!("Generative backend ready");
                Some(backend)
            }
            Ok(None) => {
                self.set_state(BackendState::Fallback);
                log::info!("No generative backend configured, using extractive summaries");
                None
            }
            Err(e) => {
                self.set_state(BackendState::Fallback);
                log::error!("Failed to initialize generative backend: {}", e);
                None
            }
        }
    }

    pub async fn summarize(&self, text: &str, tier: LengthTier) -> Result<String, SummaryError> {
        self.summarize_with_tokens(text, tier, &TokenSink::disabled())
            .await
    }

    /// Like [`BackendGate::summarize`], forwarding generated tokens to `tokens`.
    ///
    /// Tokens only flow on the generative path. An extractive result,
    /// including one produced after a backend failure, is returned whole.
    pub async fn summarize_with_tokens(
        &self,
        text: &str,
        tier: LengthTier,
        tokens: &TokenSink,
    ) -> Result<String, SummaryError> {
        if segment(text).is_empty() {
            return Err(SummaryError::EmptyInput);
        }

        self.initialize().await;

        let backend = match self.backend.get() {
            Some(Some(backend)) => Arc::clone(backend),
            _ => return self.engine.summarize(text, tier),
        };

        match self.generate(backend.as_ref(), text, tier, tokens).await {
            Ok(summary) => Ok(summary),
            Err(e) => {
                log::warn!("Generative summary failed, falling back to extractive: {}", e);
                self.engine.summarize(text, tier)
            }
        }
    }

    async fn generate(
        &self,
        backend: &dyn CompletionBackend,
        text: &str,
        tier: LengthTier,
        tokens: &TokenSink,
    ) -> Result<String, BackendError> {
        let prompt = build_summarization_prompt(text, tier);
        let options = summary_options();
        let call = backend.complete(&prompt, &options, tokens);

        let completion = match self.config.completion_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| BackendError::Timeout(limit))??,
            None => call.await?,
        };

        let summary = completion.text.trim();
        if summary.is_empty() {
            return Err(BackendError::EmptyCompletion);
        }

        log::info!("Generated {} character summary for tier {}", summary.len(), tier);
        Ok(summary.to_string())
    }

    /// Summary plus title. Title derivation never fails the call.
    pub async fn summarize_document(
        &self,
        text: &str,
        tier: LengthTier,
    ) -> Result<SummaryResult, SummaryError> {
        let summary = self.summarize(text, tier).await?;
        Ok(SummaryResult::from((summary, self.engine.title(text))))
    }
}
