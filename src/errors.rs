use thiserror::Error;

use crate::implementations::config::ConfigError;

/// Custom error types for the Reqmine system
#[derive(Debug, Error)]
pub enum ReqmineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Linguistic tool unavailable: {0}")]
    LinguisticUnavailable(String),

    #[error("Prover transport error: {0}")]
    ProverTransport(String),

    #[error("Prover returned HTTP {status}: {message}")]
    ProverStatus { status: u16, message: String },

    #[error("Prover timed out after {0} ms")]
    ProverTimeout(u64),

    #[error("Prover request cancelled")]
    ProverCancelled,

    #[error("Malformed prover response: {0}")]
    ProverResponse(String),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
}

/// Result type specific to Reqmine operations
pub type ReqmineResult<T> = Result<T, ReqmineError>;

/// Recoverable vs. non-recoverable errors
pub trait RecoverableError {
    fn is_recoverable(&self) -> bool;
    fn recovery_strategy(&self) -> Option<String>;
}

impl RecoverableError for ReqmineError {
    fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ReqmineError::LinguisticUnavailable(_)
                | ReqmineError::ProverTransport(_)
                | ReqmineError::ProverStatus { .. }
                | ReqmineError::ProverTimeout(_)
                | ReqmineError::ProverCancelled
                | ReqmineError::ProverResponse(_)
        )
    }

    fn recovery_strategy(&self) -> Option<String> {
        match self {
            ReqmineError::LinguisticUnavailable(_) => {
                Some("Use the keyword-only fallback".to_string())
            }
            ReqmineError::ProverTransport(_)
            | ReqmineError::ProverStatus { .. }
            | ReqmineError::ProverTimeout(_)
            | ReqmineError::ProverCancelled
            | ReqmineError::ProverResponse(_) => {
                Some("Fall back to the local proof heuristic".to_string())
            }
            _ => None,
        }
    }
}
