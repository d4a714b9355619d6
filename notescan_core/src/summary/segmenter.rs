use regex::Regex;
use std::sync::LazyLock;

use super::dto::Sentence;

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence break pattern is valid"));

/// Split recognized text into trimmed, non-empty sentences.
///
/// Indices are assigned after empty fragments are dropped, so they are always
/// contiguous from zero.
pub fn segment(text: &str) -> Vec<Sentence> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .enumerate()
        .map(|(index, fragment)| Sentence {
            text: fragment.to_string(),
            index,
        })
        .collect()
}
