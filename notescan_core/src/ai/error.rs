use std::time::Duration;
use thiserror::Error;

/// Failure from a generative backend. The gate recovers from every variant by
/// falling back to the extractive summary.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Request(#[from] anyhow::Error),
    #[error("backend returned an empty completion")]
    EmptyCompletion,
    #[error("backend did not answer within {0:?}")]
    Timeout(Duration),
}
