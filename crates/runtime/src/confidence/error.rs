//! Error types for the confidence module

use thiserror::Error;

/// Errors that can occur during confidence assessment
#[derive(Debug, Clone, Error)]
pub enum ConfidenceError {
    #[error("Invalid confidence request: {reason}")]
    InvalidRequest { reason: String },

    #[error("Invalid confidence configuration: {key} - {reason}")]
    InvalidConfig { key: String, reason: String },
}

/// Result type for confidence operations
pub type ConfidenceResult<T> = Result<T, ConfidenceError>;
