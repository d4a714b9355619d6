//! Extractive summarization and title derivation for recognized text.

pub mod dto;
pub mod error;
pub mod handler;
pub mod scorer;
pub mod segmenter;
pub mod selector;
pub mod title;
