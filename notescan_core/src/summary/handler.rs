use super::dto::{LengthTier, SummaryResult};
use super::error::SummaryError;
use super::scorer::score_all;
use super::segmenter::segment;
use super::selector::{join, select};
use super::title::{extract_title, FALLBACK_TITLE};

/// Rule-based summarizer. Stateless, so one instance can serve every caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryEngine;

impl SummaryEngine {
    pub fn new() -> Self {
        Self
    }

    /// Extractive summary of `text` sized by `tier`.
    ///
    /// Fails with [`SummaryError::EmptyInput`] when the text holds no sentences;
    /// the caller decides what to show the user in that case.
    pub fn summarize(&self, text: &str, tier: LengthTier) -> Result<String, SummaryError> {
        let sentences = segment(text);
        if sentences.is_empty() {
            return Err(SummaryError::EmptyInput);
        }

        let total = sentences.len();
        let selected = select(score_all(sentences), tier);
        log::debug!(
            "Extractive summary selected {} of {} sentences for tier {}",
            selected.len(),
            total,
            tier
        );

        Ok(join(&selected))
    }

    /// Title for `text`. Never fails; falls back to [`FALLBACK_TITLE`].
    pub fn title(&self, text: &str) -> String {
        match extract_title(text) {
            Ok(title) => title,
            Err(e) => {
                log::debug!("Using fallback title: {}", e);
                FALLBACK_TITLE.to_string()
            }
        }
    }

    pub fn summarize_document(
        &self,
        text: &str,
        tier: LengthTier,
    ) -> Result<SummaryResult, SummaryError> {
        let summary = self.summarize(text, tier)?;
        Ok(SummaryResult::from((summary, self.title(text))))
    }
}
