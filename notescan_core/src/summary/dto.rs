use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::TierParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
    /// Zero-based position among the non-empty fragments of the input.
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    pub score: i64,
}

/// Coarse summary length chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthTier {
    Short,
    #[default]
    Medium,
    Large,
}

impl LengthTier {
    pub const ALL: [LengthTier; 3] = [LengthTier::Short, LengthTier::Medium, LengthTier::Large];

    /// Number of sentences this tier aims for before capping at the input size.
    pub fn target_sentences(&self) -> usize {
        match self {
            LengthTier::Short => 2,
            LengthTier::Medium => 4,
            LengthTier::Large => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LengthTier::Short => "short",
            LengthTier::Medium => "medium",
            LengthTier::Large => "large",
        }
    }
}

impl fmt::Display for LengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LengthTier {
    type Err = TierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(LengthTier::Short),
            "medium" => Ok(LengthTier::Medium),
            "large" => Ok(LengthTier::Large),
            _ => Err(TierParseError(s.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SummaryResult {
    pub summary: String,
    pub title: String,
}

impl From<(String, String)> for SummaryResult {
    fn from(parts: (String, String)) -> Self {
        let (summary, title) = parts;
        Self { summary, title }
    }
}
