use regex::Regex;
use std::sync::LazyLock;

use super::error::TitleError;
use super::segmenter::segment;

pub const FALLBACK_TITLE: &str = "Document Summary";
pub const MAX_TITLE_CHARS: usize = 50;
const ELLIPSIS: &str = "...";

// Word characters are ASCII only; accented letters count as noise.
static TITLE_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_\s-]").expect("title noise pattern is valid"));

/// Derive a title from the first sentence of `text`.
///
/// The cut to [`MAX_TITLE_CHARS`] happens before the ellipsis is added, so a
/// truncated title is 53 characters long.
pub fn extract_title(text: &str) -> Result<String, TitleError> {
    let first = segment(text)
        .into_iter()
        .next()
        .ok_or(TitleError::NoSentence)?;

    let cleaned = TITLE_NOISE.replace_all(&first.text, "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Err(TitleError::EmptyAfterCleaning);
    }

    let mut title: String = cleaned.chars().take(MAX_TITLE_CHARS).collect();
    if cleaned.chars().count() >= MAX_TITLE_CHARS {
        title.push_str(ELLIPSIS);
    }

    Ok(title)
}
