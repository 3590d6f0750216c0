//! Error handling for the benchmark engine
//!
//! This module defines the error types used throughout the benchmark engine.

use thiserror::Error;

/// Benchmark engine error type
#[derive(Error, Debug, Clone)]
pub enum BenchError {
    /// The requested algorithm identifier is outside the fixed supported set.
    /// Carries the offending identifier.
    #[error("Algorithm '{0}' not supported")]
    UnsupportedAlgorithm(String),

    /// Requested payload size is missing, zero, or negative.
    #[error("Invalid data size: {0}")]
    InvalidDataSize(String),

    /// Cipher setup or encryption failed.
    #[error("Encryption failed: {0}")]
    Encryption(String),

    /// Decryption failed (bad key, IV, hex, or padding). Never swallowed.
    #[error("Decryption failed: {0}")]
    Decryption(String),

    /// A cipher operation failed in the middle of a benchmark run.
    #[error("Benchmark execution failed: {0}")]
    Execution(String),

    /// Anything that should not happen during normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result alias used across the engine
pub type BenchResult<T> = Result<T, BenchError>;

impl BenchError {
    /// Create an unsupported-algorithm error from the offending identifier
    pub fn unsupported_algorithm(id: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm(id.into())
    }

    /// Create an invalid-data-size error
    pub fn invalid_data_size(message: impl Into<String>) -> Self {
        Self::InvalidDataSize(message.into())
    }

    /// Create an encryption error
    pub fn encryption(message: impl Into<String>) -> Self {
        Self::Encryption(message.into())
    }

    /// Create a decryption error
    pub fn decryption(message: impl Into<String>) -> Self {
        Self::Decryption(message.into())
    }

    /// Create a benchmark execution error
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the error is a request-validation failure (caller's fault)
    /// as opposed to an execution failure inside the engine.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedAlgorithm(_) | Self::InvalidDataSize(_)
        )
    }
}

// Hex decoding happens when reconstructing ciphertext/IV bytes for decryption
impl From<hex::FromHexError> for BenchError {
    fn from(err: hex::FromHexError) -> Self {
        Self::decryption(format!("hex decoding error: {}", err))
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("JSON error: {}", err))
    }
}
