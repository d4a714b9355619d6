use super::dto::{ScoredSentence, Sentence};

pub const IMPORTANT_KEYWORDS: [&str; 11] = [
    "important",
    "key",
    "main",
    "primary",
    "essential",
    "critical",
    "summary",
    "conclusion",
    "result",
    "finding",
    "recommendation",
];

const KEYWORD_BOOST: i64 = 5;
const LONG_SENTENCE_BOOST: i64 = 2;
const LONG_SENTENCE_CHARS: usize = 100;

/// Importance of a sentence within a document of `total_sentences`.
///
/// Earlier sentences start higher; every distinct keyword found adds
/// [`KEYWORD_BOOST`] and sentences over 100 characters add [`LONG_SENTENCE_BOOST`].
pub fn score(sentence: &Sentence, total_sentences: usize) -> i64 {
    let mut score = total_sentences as i64 - sentence.index as i64;

    let lower = sentence.text.to_lowercase();
    let matched = IMPORTANT_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .count() as i64;
    score += matched * KEYWORD_BOOST;

    if sentence.text.trim().chars().count() > LONG_SENTENCE_CHARS {
        score += LONG_SENTENCE_BOOST;
    }

    score
}

pub fn score_all(sentences: Vec<Sentence>) -> Vec<ScoredSentence> {
    let total = sentences.len();
    sentences
        .into_iter()
        .map(|sentence| {
            let score = score(&sentence, total);
            ScoredSentence { sentence, score }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(text: &str, index: usize) -> Sentence {
        Sentence {
            text: text.to_string(),
            index,
        }
    }

    #[test]
    fn test_base_score_favors_earlier_sentences() {
        assert_eq!(score(&sentence("plain words", 0), 5), 5);
        assert_eq!(score(&sentence("plain words", 4), 5), 1);
    }

    #[test]
    fn test_keyword_adds_five() {
        let plain = score(&sentence("the weather was mild", 1), 3);
        let flagged = score(&sentence("the weather was critical", 1), 3);
        assert_eq!(flagged - plain, 5);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive_substring() {
        // "Results" contains "result"; "KEY" matches "key".
        assert_eq!(score(&sentence("Results are KEY", 0), 1), 1 + 10);
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        let once = score(&sentence("important", 0), 1);
        let thrice = score(&sentence("important important important", 0), 1);
        assert_eq!(once, thrice);
    }

    #[test]
    fn test_long_sentence_boost() {
        let exactly_100 = "a".repeat(100);
        let over_100 = "a".repeat(101);
        assert_eq!(score(&sentence(&exactly_100, 0), 1), 1);
        assert_eq!(score(&sentence(&over_100, 0), 1), 3);
    }

    #[test]
    fn test_long_sentence_counts_characters_not_bytes() {
        // 60 two-byte characters stay under the threshold.
        let accented = "é".repeat(60);
        assert_eq!(score(&sentence(&accented, 0), 1), 1);
    }

    #[test]
    fn test_score_all_uses_sequence_length() {
        let scored = score_all(vec![sentence("one", 0), sentence("two", 1)]);
        assert_eq!(scored[0].score, 2);
        assert_eq!(scored[1].score, 1);
        assert_eq!(scored[1].sentence.text, "two");
    }
}
