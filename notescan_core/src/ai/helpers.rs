use crate::summary::dto::LengthTier;

use super::dto::CompletionOptions;

/// End-of-turn and end-of-text markers used across common chat model families.
pub const STOP_SEQUENCES: [&str; 9] = [
    "</s>",
    "<|end|>",
    "<|eot_id|>",
    "<|end_of_text|>",
    "<|im_end|>",
    "<|EOT|>",
    "<|END_OF_TURN_TOKEN|>",
    "<|end_of_turn|>",
    "<|endoftext|>",
];

pub const MAX_SUMMARY_TOKENS: u32 = 200;
pub const SUMMARY_TEMPERATURE: f32 = 0.7;
pub const SUMMARY_TOP_P: f32 = 0.9;

pub fn length_instruction(tier: LengthTier) -> &'static str {
    match tier {
        LengthTier::Short => "Write a brief 1-2 sentence summary.",
        LengthTier::Medium => "Write a concise 3-4 sentence summary.",
        LengthTier::Large => "Write a detailed 5-6 sentence summary.",
    }
}

pub fn build_summarization_prompt(text: &str, tier: LengthTier) -> String {
    format!(
        "Please summarize the following text. {}\n\nText to summarize:\n{}\n\nSummary:",
        length_instruction(tier),
        text
    )
}

pub fn summary_options() -> CompletionOptions {
    CompletionOptions {
        max_tokens: MAX_SUMMARY_TOKENS,
        stop_sequences: STOP_SEQUENCES.iter().map(|s| s.to_string()).collect(),
        temperature: SUMMARY_TEMPERATURE,
        top_p: SUMMARY_TOP_P,
    }
}

/// Cut `text` at the earliest stop sequence, if any occurs.
pub fn truncate_at_stop<'a>(text: &'a str, stop_sequences: &[String]) -> &'a str {
    let cut = stop_sequences
        .iter()
        .filter(|stop| !stop.is_empty())
        .filter_map(|stop| text.find(stop.as_str()))
        .min()
        .unwrap_or(text.len());
    &text[..cut]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_summarization_prompt() {
        let prompt = build_summarization_prompt("Scanned body", LengthTier::Short);

        assert!(prompt.contains("Scanned body"));
        assert!(prompt.contains("1-2 sentence"));
        assert!(prompt.ends_with("Summary:"));
    }

    #[test]
    fn test_each_tier_has_its_own_instruction() {
        assert!(length_instruction(LengthTier::Medium).contains("3-4"));
        assert!(length_instruction(LengthTier::Large).contains("5-6"));
    }

    #[test]
    fn test_summary_options() {
        let options = summary_options();
        assert_eq!(options.max_tokens, 200);
        assert!(options.temperature > 0.0);
        assert!(options.stop_sequences.iter().any(|s| s == "<|eot_id|>"));
        assert!(options.stop_sequences.iter().any(|s| s == "</s>"));
    }

    #[test]
    fn test_truncate_at_stop() {
        let stops = summary_options().stop_sequences;
        assert_eq!(truncate_at_stop("A summary.<|im_end|>junk", &stops), "A summary.");
        assert_eq!(truncate_at_stop("x</s>y<|end|>z", &stops), "x");
        assert_eq!(truncate_at_stop("clean text", &stops), "clean text");
        assert_eq!(truncate_at_stop("kept", &[String::new()]), "kept");
    }
}
