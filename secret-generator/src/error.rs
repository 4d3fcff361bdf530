//! Error types for secret generation.

use thiserror::Error;

/// Errors raised while producing secrets.
#[derive(Debug, Error)]
pub enum SecretError {
    /// The random-byte source could not fill the buffer.
    #[error("Random source unavailable: {0}")]
    RandomSource(String),
}

/// Result alias used throughout the generator.
pub type SecretResult<T> = Result<T, SecretError>;
