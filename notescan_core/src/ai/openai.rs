use async_trait::async_trait;
use open_ai_rust_responses_by_sshift::{Client as OAIClient, Model, Request};
use std::sync::Arc;

use super::backend::{BackendProvider, CompletionBackend};
use super::dto::{Completion, CompletionOptions};
use super::error::BackendError;
use super::helpers::truncate_at_stop;
use super::tokens::TokenSink;

/// Generative backend over the OpenAI Responses API.
///
/// The Responses API has no stop parameter, so stop sequences are applied to
/// the returned text. The reply arrives in one piece and is replayed to the
/// token sink word by word.
#[derive(Clone)]
pub struct OpenAiBackend {
    openai_client: OAIClient,
}

impl OpenAiBackend {
    pub fn new(openai_api_key: &str) -> Result<Self, anyhow::Error> {
        let openai_client = OAIClient::new(openai_api_key)?;
        Ok(Self { openai_client })
    }
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    async fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
        tokens: &TokenSink,
    ) -> Result<Completion, BackendError> {
        let request = Request::builder()
            .model(Model::GPT41Nano)
            .input(prompt)
            .max_output_tokens(options.max_tokens)
            .temperature(options.temperature)
            .build();

        let response = self
            .openai_client
            .responses
            .create(request)
            .await
            .map_err(|e| BackendError::Request(e.into()))?;

        let raw = response.output_text();
        let text = truncate_at_stop(&raw, &options.stop_sequences).to_string();

        if tokens.is_enabled() {
            for word in text.split_inclusive(char::is_whitespace) {
                tokens.emit(word).await;
            }
        }

        Ok(Completion::from(text))
    }
}

/// Builds an [`OpenAiBackend`] when an API key is configured.
#[derive(Debug, Clone, Default)]
pub struct OpenAiProvider {
    openai_api_key: Option<String>,
}

impl OpenAiProvider {
    pub fn new(openai_api_key: Option<String>) -> Self {
        Self { openai_api_key }
    }
}

#[async_trait]
impl BackendProvider for OpenAiProvider {
    async fn acquire(&self) -> anyhow::Result<Option<Arc<dyn CompletionBackend>>> {
        let key = match self.openai_api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => key,
            _ => {
                log::info!("OPENAI_API_KEY not set, generative summaries disabled");
                return Ok(None);
            }
        };

        let backend = OpenAiBackend::new(key)?;
        Ok(Some(Arc::new(backend)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_provider_without_key_is_absent() {
        let provider = OpenAiProvider::new(None);
        assert!(provider.acquire().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_provider_with_blank_key_is_absent() {
        let provider = OpenAiProvider::new(Some("   ".to_string()));
        assert!(provider.acquire().await.unwrap().is_none());
    }
}
