//! Error types for decider execution

use thiserror::Error;

/// Errors that can occur while running deciders and processes
///
/// Domain failures are never reported here. A decider that cannot honour a
/// command either produces no events or evolves into a terminal error state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeciderError {
    /// A process kept producing commands past the configured iteration cap
    #[error(
        "Saga did not converge after {iterations} iterations ({pending} commands still pending)"
    )]
    SagaDidNotConverge {
        /// Commands handled before giving up
        iterations: usize,
        /// Commands left in the work queue
        pending: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for decider operations
pub type DeciderResult<T> = Result<T, DeciderError>;

impl From<serde_json::Error> for DeciderError {
    fn from(err: serde_json::Error) -> Self {
        DeciderError::Serialization(err.to_string())
    }
}
