//! Error types for the grading interface.

use thiserror::Error;

/// Failures local to a feedback source.
#[derive(Debug, Error)]
pub enum GradingError {
    /// The named credential is not available
    #[error("credential not found: {0}")]
    MissingCredential(String),

    /// The request to the grader failed
    #[error("transport error: {0}")]
    Transport(String),

    /// The grader's response is not the expected JSON object
    #[error("malformed feedback: {0}")]
    Malformed(#[from] serde_json::Error),
}
