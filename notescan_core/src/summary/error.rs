use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummaryError {
    #[error("no sentences found in input text")]
    EmptyInput,
}

/// Raised while deriving a title. Never leaves [`crate::summary::handler::SummaryEngine`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TitleError {
    #[error("input has no leading sentence")]
    NoSentence,
    #[error("leading sentence is empty after cleaning")]
    EmptyAfterCleaning,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown summary length '{0}', expected short, medium or large")]
pub struct TierParseError(pub String);
