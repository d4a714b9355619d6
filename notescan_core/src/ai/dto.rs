use std::fmt;
use std::time::Duration;

/// Lifecycle of the generative backend as seen by [`crate::ai::gate::BackendGate`].
///
/// `Ready` and `Fallback` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BackendState {
    Uninitialized = 0,
    Initializing = 1,
    Ready = 2,
    Fallback = 3,
}

impl BackendState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BackendState::Ready | BackendState::Fallback)
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            1 => BackendState::Initializing,
            2 => BackendState::Ready,
            3 => BackendState::Fallback,
            _ => BackendState::Uninitialized,
        }
    }
}

impl fmt::Display for BackendState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendState::Uninitialized => "uninitialized",
            BackendState::Initializing => "initializing",
            BackendState::Ready => "ready",
            BackendState::Fallback => "fallback",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOptions {
    pub max_tokens: u32,
    pub stop_sequences: Vec<String>,
    pub temperature: f32,
    pub top_p: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
}

impl From<String> for Completion {
    fn from(text: String) -> Self {
        Self { text }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GateConfig {
    /// Upper bound on a single backend call. `None` waits indefinitely.
    pub completion_timeout: Option<Duration>,
}
