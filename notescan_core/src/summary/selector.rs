//! Tier-based sentence selection.
//!
//! Picks the highest scoring sentences for a [`LengthTier`], then puts them
//! back into document order so the summary reads like the source.

use super::dto::{LengthTier, ScoredSentence, Sentence};

/// Choose `min(tier target, available)` sentences, returned in document order.
///
/// Ties on score go to the earlier sentence.
pub fn select(mut scored: Vec<ScoredSentence>, tier: LengthTier) -> Vec<Sentence> {
    let target = tier.target_sentences().min(scored.len());

    scored.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.sentence.index.cmp(&b.sentence.index))
    });
    scored.truncate(target);

    let mut selected: Vec<Sentence> = scored.into_iter().map(|s| s.sentence).collect();
    selected.sort_by_key(|s| s.index);
    selected
}

/// Join sentences with `". "` and close with a period. No sentences gives `"."`.
pub fn join(sentences: &[Sentence]) -> String {
    let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
    format!("{}.", texts.join(". "))
}
