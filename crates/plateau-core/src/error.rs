//! Error types for plateau-core.

use thiserror::Error;

/// Result type for plateau-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or running a simulation.
///
/// Non-convergence is not represented here: every configured policy is
/// proven to terminate (see [`crate::bound`]).
#[derive(Debug, Error)]
pub enum Error {
    /// The layer cannot be simulated under the configured empty-layer policy
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unknown or malformed configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
